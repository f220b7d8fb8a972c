//! Pure editing operations over the dynamic-section tree.
//!
//! # Responsibility
//! - Transform an ordered section/item tree into a replacement tree, one
//!   user action at a time.
//! - Stay persistence-free: the hosting form attaches the returned tree to
//!   its record and delegates saving to the store.
//!
//! # Invariants
//! - Every operation returns a new tree and never mutates its input, so
//!   callers can treat this module as a deterministic reducer.
//! - Section/item indices come from the current render; an invalid index
//!   is a precondition violation surfaced as a typed error.
//! - Deferred attachment continuations address items by stable id, never
//!   by position, so edits that land in between cannot retarget them.

use crate::model::company::{LineItem, Section};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type EditResult<T> = Result<T, EditError>;

/// Errors from section tree operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// Section index is outside the current tree.
    SectionIndexOutOfRange { index: usize, len: usize },
    /// Item index is outside the addressed section's item list.
    ItemIndexOutOfRange { index: usize, len: usize },
    /// Item id no longer exists anywhere in the tree.
    ItemNotFound(String),
}

impl Display for EditError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SectionIndexOutOfRange { index, len } => {
                write!(f, "section index {index} out of range for {len} sections")
            }
            Self::ItemIndexOutOfRange { index, len } => {
                write!(f, "item index {index} out of range for {len} items")
            }
            Self::ItemNotFound(id) => write!(f, "section item not found: {id}"),
        }
    }
}

impl Error for EditError {}

/// Resolved attachment reference for one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Attachment URL or embedded data produced by the file reader.
    pub file_url: String,
    pub file_name: String,
}

/// Returns the tree with one empty section appended.
pub fn add_section(tree: &[Section]) -> Vec<Section> {
    let mut next = tree.to_vec();
    next.push(Section::new());
    next
}

/// Returns the tree with the section at `index` replaced wholesale.
pub fn update_section(tree: &[Section], index: usize, section: Section) -> EditResult<Vec<Section>> {
    check_section_index(tree, index)?;
    let mut next = tree.to_vec();
    next[index] = section;
    Ok(next)
}

/// Returns the tree with the section at `index` removed.
///
/// Later sections shift down by one position; positions are render order
/// only and carry no identity.
pub fn remove_section(tree: &[Section], index: usize) -> EditResult<Vec<Section>> {
    check_section_index(tree, index)?;
    let mut next = tree.to_vec();
    next.remove(index);
    Ok(next)
}

/// Returns the tree with one empty item appended to the addressed section.
pub fn add_item(tree: &[Section], section_index: usize) -> EditResult<Vec<Section>> {
    check_section_index(tree, section_index)?;
    let mut next = tree.to_vec();
    next[section_index].items.push(LineItem::new());
    Ok(next)
}

/// Returns the tree with one item replaced wholesale.
pub fn update_item(
    tree: &[Section],
    section_index: usize,
    item_index: usize,
    item: LineItem,
) -> EditResult<Vec<Section>> {
    check_item_index(tree, section_index, item_index)?;
    let mut next = tree.to_vec();
    next[section_index].items[item_index] = item;
    Ok(next)
}

/// Returns the tree with one item spliced out of its section.
pub fn remove_item(
    tree: &[Section],
    section_index: usize,
    item_index: usize,
) -> EditResult<Vec<Section>> {
    check_item_index(tree, section_index, item_index)?;
    let mut next = tree.to_vec();
    next[section_index].items.remove(item_index);
    Ok(next)
}

/// Applies a resolved attachment read to the item with the given id.
///
/// # Contract
/// - `Some(attachment)` sets `file_url`/`file_name`; `None` clears both
///   (a cleared file selection is a resolution, not an error).
/// - Id addressing keeps the deferred continuation safe against index
///   shifts; a removed item yields `ItemNotFound` instead of silently
///   mutating a neighbor.
pub fn set_item_attachment(
    tree: &[Section],
    item_id: &str,
    attachment: Option<Attachment>,
) -> EditResult<Vec<Section>> {
    let mut next = tree.to_vec();
    for section in &mut next {
        if let Some(item) = section.items.iter_mut().find(|item| item.id == item_id) {
            match attachment {
                Some(attachment) => {
                    item.file_url = Some(attachment.file_url);
                    item.file_name = Some(attachment.file_name);
                }
                None => {
                    item.file_url = None;
                    item.file_name = None;
                }
            }
            return Ok(next);
        }
    }
    Err(EditError::ItemNotFound(item_id.to_string()))
}

fn check_section_index(tree: &[Section], index: usize) -> EditResult<()> {
    if index < tree.len() {
        Ok(())
    } else {
        Err(EditError::SectionIndexOutOfRange {
            index,
            len: tree.len(),
        })
    }
}

fn check_item_index(tree: &[Section], section_index: usize, item_index: usize) -> EditResult<()> {
    check_section_index(tree, section_index)?;
    let len = tree[section_index].items.len();
    if item_index < len {
        Ok(())
    } else {
        Err(EditError::ItemIndexOutOfRange {
            index: item_index,
            len,
        })
    }
}
