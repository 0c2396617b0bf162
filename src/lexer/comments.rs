use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use super::position::PositionTracker;

lazy_static! {
    static ref COMMENT_DELIMITER: Regex = Regex::new(r"/\*|\*/").unwrap();
}

/// Block comment nesting. `InComment` always carries a depth of at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentState {
    #[default]
    Normal,
    InComment(u32),
}

impl CommentState {
    pub fn depth(&self) -> u32 {
        match self {
            CommentState::Normal => 0,
            CommentState::InComment(depth) => *depth,
        }
    }

    pub fn open(&mut self) {
        *self = CommentState::InComment(self.depth() + 1);
    }

    pub fn close(&mut self) {
        *self = match self.depth() {
            0 | 1 => CommentState::Normal,
            depth => CommentState::InComment(depth - 1),
        };
    }
}

/// Skips comment text after an opener has been consumed.
///
/// Nested `/*` deepen the comment, `*/` closes one level; everything else,
/// newlines included, is fed to the tracker and dropped. Returns the number
/// of bytes consumed up to and including the delimiter that brought the state
/// back to `Normal`, or `None` when `rest` ran out first, in which case all of
/// it has been consumed.
pub fn skip_block_comment(
    state: &mut CommentState,
    rest: &str,
    tracker: &mut PositionTracker,
) -> Option<usize> {
    let mut consumed = 0;

    while let CommentState::InComment(_) = *state {
        let Some(delimiter) = COMMENT_DELIMITER.find(&rest[consumed..]) else {
            tracker.advance(&rest[consumed..]);
            return None;
        };

        let end = consumed + delimiter.end();
        tracker.advance(&rest[consumed..end]);

        if delimiter.as_str() == "/*" {
            state.open();
        } else {
            state.close();
        }
        debug!(depth = state.depth(), line = tracker.line(), "block comment delimiter");

        consumed = end;
    }

    Some(consumed)
}
