/*
program.rs

Copyright 2025 Hervé Quatremain

This file is part of Pathquest.

Pathquest is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Pathquest is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Pathquest. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Manage the player's program.
//!
//! The module manages the direction blocks that the player assembled, as well as the undo and
//! redo lists.

use serde::Serialize;

use crate::generator::direction::Direction;

/// Undo and redo operations.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Operation {
    /// A block was inserted at `index`.
    Insert { index: usize, block: Direction },

    /// The block at `index` was removed.
    Remove { index: usize, block: Direction },

    /// The block at `from` was moved to `to`.
    Reorder { from: usize, to: usize },

    /// All the blocks were removed.
    Clear { blocks: Vec<Direction> },
}

/// Ordered list of direction blocks.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// Blocks, in execution order.
    blocks: Vec<Direction>,

    /// List of undo operations.
    #[serde(skip)]
    undo_op: Vec<Operation>,

    /// List of redo operations.
    #[serde(skip)]
    redo_op: Vec<Operation>,
}

impl From<Vec<Direction>> for Program {
    fn from(blocks: Vec<Direction>) -> Self {
        Self {
            blocks,
            undo_op: Vec::new(),
            redo_op: Vec::new(),
        }
    }
}

impl Program {
    /// Create an empty [`Program`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the blocks in execution order.
    pub fn blocks(&self) -> &[Direction] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Add a block at the end of the program.
    pub fn push(&mut self, block: Direction) {
        let index: usize = self.blocks.len();
        self.blocks.push(block);
        self.record(Operation::Insert { index, block });
    }

    /// Insert a block at the given index. Return false, and do nothing, if the index is past the
    /// end of the program.
    pub fn insert(&mut self, index: usize, block: Direction) -> bool {
        if index > self.blocks.len() {
            return false;
        }
        self.blocks.insert(index, block);
        self.record(Operation::Insert { index, block });
        true
    }

    /// Remove the block at the given index and return it, or None if there is no such block.
    pub fn remove(&mut self, index: usize) -> Option<Direction> {
        if index >= self.blocks.len() {
            return None;
        }
        let block: Direction = self.blocks.remove(index);
        self.record(Operation::Remove { index, block });
        Some(block)
    }

    /// Move the block at `from` so that it ends up at index `to`.
    ///
    /// Return false, and do nothing, if one of the indexes does not designate a block.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        if !self.move_block(from, to) {
            return false;
        }
        if from != to {
            self.record(Operation::Reorder { from, to });
        }
        true
    }

    /// Remove all the blocks. The operation can be undone.
    pub fn clear(&mut self) {
        if self.blocks.is_empty() {
            return;
        }
        let blocks: Vec<Direction> = std::mem::take(&mut self.blocks);
        self.record(Operation::Clear { blocks });
    }

    /// Undo the last operation.
    pub fn undo(&mut self) {
        if let Some(op) = self.undo_op.pop() {
            match &op {
                Operation::Insert { index, .. } => {
                    self.blocks.remove(*index);
                }
                Operation::Remove { index, block } => {
                    self.blocks.insert(*index, *block);
                }
                Operation::Reorder { from, to } => {
                    self.move_block(*to, *from);
                }
                Operation::Clear { blocks } => {
                    self.blocks = blocks.clone();
                }
            }
            self.redo_op.push(op);
        }
    }

    /// Redo the last undo operation.
    pub fn redo(&mut self) {
        if let Some(op) = self.redo_op.pop() {
            match &op {
                Operation::Insert { index, block } => {
                    self.blocks.insert(*index, *block);
                }
                Operation::Remove { index, .. } => {
                    self.blocks.remove(*index);
                }
                Operation::Reorder { from, to } => {
                    self.move_block(*from, *to);
                }
                Operation::Clear { .. } => {
                    self.blocks.clear();
                }
            }
            self.undo_op.push(op);
        }
    }

    /// Return the length of the undo list.
    pub fn undo_len(&self) -> usize {
        self.undo_op.len()
    }

    /// Return the length of the redo list.
    pub fn redo_len(&self) -> usize {
        self.redo_op.len()
    }

    /// Remove the block at `from` and insert it back at `to`.
    fn move_block(&mut self, from: usize, to: usize) -> bool {
        let len: usize = self.blocks.len();
        if from >= len || to >= len {
            return false;
        }
        let block: Direction = self.blocks.remove(from);
        self.blocks.insert(to, block);
        true
    }

    /// Store the operation in the undo list. A new operation invalidates the redo list.
    fn record(&mut self, op: Operation) {
        self.undo_op.push(op);
        self.redo_op.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    #[test]
    fn editing() {
        let mut program = Program::new();
        program.push(Up);
        program.push(Right);
        assert!(program.insert(1, Down));
        assert_eq!(program.blocks(), &[Up, Down, Right]);
        assert!(!program.insert(5, Left));

        assert_eq!(program.remove(0), Some(Up));
        assert_eq!(program.remove(7), None);
        assert_eq!(program.blocks(), &[Down, Right]);
        assert_eq!(program.len(), 2);
    }

    #[test]
    fn reorder_moves_a_block() {
        let mut program = Program::from(vec![Up, Down, Left, Right]);
        assert!(program.reorder(0, 2));
        assert_eq!(program.blocks(), &[Down, Left, Up, Right]);
        assert!(program.reorder(3, 0));
        assert_eq!(program.blocks(), &[Right, Down, Left, Up]);
        assert!(!program.reorder(1, 4));
        assert_eq!(program.blocks(), &[Right, Down, Left, Up]);
    }

    #[test]
    fn undo_and_redo() {
        let mut program = Program::new();
        program.push(Up);
        program.push(Left);
        program.reorder(0, 1);
        program.remove(0);
        assert_eq!(program.blocks(), &[Up]);

        program.undo();
        assert_eq!(program.blocks(), &[Left, Up]);
        program.undo();
        assert_eq!(program.blocks(), &[Up, Left]);
        program.undo();
        assert_eq!(program.blocks(), &[Up]);
        assert_eq!(program.redo_len(), 3);

        program.redo();
        program.redo();
        assert_eq!(program.blocks(), &[Left, Up]);

        // A new edit drops the redo list
        program.push(Down);
        assert_eq!(program.redo_len(), 0);
        program.redo();
        assert_eq!(program.blocks(), &[Left, Up, Down]);
    }

    #[test]
    fn clear_can_be_undone() {
        let mut program = Program::from(vec![Up, Right]);
        program.clear();
        assert!(program.is_empty());
        program.undo();
        assert_eq!(program.blocks(), &[Up, Right]);
        program.redo();
        assert!(program.is_empty());
        assert_eq!(program.undo_len(), 1);
    }

    #[test]
    fn serializes_blocks_only() {
        let mut program = Program::new();
        program.push(Up);
        program.push(Right);
        assert_eq!(
            serde_json::to_string(&program).unwrap(),
            r#"{"blocks":["up","right"]}"#
        );
    }
}
