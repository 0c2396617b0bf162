//! Identifier interning.
//!
//! Every distinct identifier name maps to exactly one [`Declaration`] owned by
//! the [`SymbolTable`]. Tokens refer to declarations through a [`DeclId`]
//! handle, which stays valid for as long as the table lives. Declarations are
//! never removed.
//!
//! The table hashes names into a fixed number of buckets chosen at
//! construction time; each bucket chains the ids of the names that landed in
//! it, so a small bucket count only makes chains longer.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;
use tracing::debug;

/// Stable handle to an interned identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeclId(u32);

impl DeclId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Interned record for one distinct identifier name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub first_line: u32,
    pub occurrence_count: u32,
}

#[derive(Debug, Clone)]
pub struct SymbolTable {
    buckets: Vec<Vec<DeclId>>,
    decls: Vec<Declaration>,
}

impl SymbolTable {
    pub fn with_buckets(bucket_count: usize) -> Self {
        SymbolTable {
            buckets: vec![Vec::new(); bucket_count.max(1)],
            decls: Vec::new(),
        }
    }

    /// Returns the declaration for `name`, creating it on first sight.
    ///
    /// A new declaration starts with an occurrence count of 1 and remembers
    /// `line`; an existing one only has its count bumped.
    pub fn lookup_or_insert(&mut self, name: &str, line: u32) -> DeclId {
        let bucket = self.bucket_of(name);

        if let Some(id) = self.find_in(bucket, name) {
            self.decls[id.index()].occurrence_count += 1;
            return id;
        }

        let id = DeclId(self.decls.len() as u32);
        self.decls.push(Declaration {
            name: name.to_string(),
            first_line: line,
            occurrence_count: 1,
        });
        self.buckets[bucket].push(id);

        debug!(name, line, id = id.0, "interned identifier");
        id
    }

    pub fn lookup(&self, name: &str) -> Option<DeclId> {
        self.find_in(self.bucket_of(name), name)
    }

    pub fn get(&self, id: DeclId) -> Option<&Declaration> {
        self.decls.get(id.index())
    }

    pub fn get_by_name(&self, name: &str) -> Option<&Declaration> {
        self.lookup(name).and_then(|id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Declarations in the order they were first seen.
    pub fn iter(&self) -> impl Iterator<Item = (DeclId, &Declaration)> {
        self.decls
            .iter()
            .enumerate()
            .map(|(index, decl)| (DeclId(index as u32), decl))
    }

    fn bucket_of(&self, name: &str) -> usize {
        let mut hasher = FxHasher::default();
        name.hash(&mut hasher);
        (hasher.finish() % self.buckets.len() as u64) as usize
    }

    fn find_in(&self, bucket: usize, name: &str) -> Option<DeclId> {
        self.buckets[bucket]
            .iter()
            .copied()
            .find(|id| self.decls[id.index()].name == name)
    }
}
