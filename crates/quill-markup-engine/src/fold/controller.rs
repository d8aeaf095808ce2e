use log::debug;

use crate::{
    buffer::TextBuffer,
    scan::{MetadataBlock, block_at, find_metadata_blocks},
};

use super::state::{FoldEffect, FoldHost, FoldRange, FoldState};

/// Fold state of a single metadata block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockFold {
    Expanded,
    /// A folded range covers exactly `[block.from, block.to]`.
    Folded,
}

/// Reads the fold state of `block`.
pub fn block_fold<S: FoldState + ?Sized>(state: &S, block: &MetadataBlock) -> BlockFold {
    let exact = FoldRange::of_block(block);
    if state.folded_in(block.span()).contains(&exact) {
        BlockFold::Folded
    } else {
        BlockFold::Expanded
    }
}

/// What [`toggle_all_blocks`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The buffer has no metadata blocks; nothing was requested.
    NoBlocks,
    Folded,
    Unfolded,
}

/// Requests a fold of the metadata block containing `pos`.
///
/// Returns false, without dispatching anything, when `pos` is not inside a block.
pub fn fold_block_at_position<B, H>(buffer: &B, host: &mut H, pos: usize) -> bool
where
    B: TextBuffer + ?Sized,
    H: FoldHost + ?Sized,
{
    let blocks = find_metadata_blocks(buffer);
    let Some(block) = block_at(&blocks, pos) else {
        debug!("fold requested at {pos}, outside any metadata block");
        return false;
    };

    let range = FoldRange::of_block(block);
    debug!("folding metadata block {}..{}", range.from, range.to);
    host.dispatch(vec![FoldEffect::Fold(range)]);
    true
}

/// Requests removal of every folded range intersecting the block containing `pos`.
///
/// Returns false when `pos` is not inside a block.
pub fn unfold_block_at_position<B, H>(buffer: &B, host: &mut H, pos: usize) -> bool
where
    B: TextBuffer + ?Sized,
    H: FoldHost + ?Sized,
{
    let blocks = find_metadata_blocks(buffer);
    let Some(block) = block_at(&blocks, pos) else {
        return false;
    };

    let mut folded = host.folded_in(block.span());
    folded.sort();
    folded.dedup();
    debug!(
        "unfolding metadata block {}..{} ({} ranges)",
        block.from,
        block.to,
        folded.len()
    );
    if !folded.is_empty() {
        host.dispatch(folded.into_iter().map(FoldEffect::Unfold).collect());
    }
    true
}

/// Folds every metadata block, or unfolds them all if all are already folded.
///
/// When folding, any folded range touching a block is removed first in a
/// separate dispatch, so hosts that do not deduplicate never end up with
/// overlapping registrations.
pub fn toggle_all_blocks<B, H>(buffer: &B, host: &mut H) -> ToggleOutcome
where
    B: TextBuffer + ?Sized,
    H: FoldHost + ?Sized,
{
    let blocks = find_metadata_blocks(buffer);
    if blocks.is_empty() {
        return ToggleOutcome::NoBlocks;
    }

    let exact: Vec<FoldRange> = blocks.iter().map(FoldRange::of_block).collect();
    let all_folded = blocks
        .iter()
        .all(|b| block_fold(&*host, b) == BlockFold::Folded);

    if all_folded {
        debug!("unfolding all {} metadata blocks", blocks.len());
        host.dispatch(exact.into_iter().map(FoldEffect::Unfold).collect());
        return ToggleOutcome::Unfolded;
    }

    let mut stale: Vec<FoldRange> = blocks
        .iter()
        .flat_map(|b| host.folded_in(b.span()))
        .collect();
    stale.sort();
    stale.dedup();
    debug!(
        "folding all {} metadata blocks, clearing {} existing ranges",
        blocks.len(),
        stale.len()
    );

    if !stale.is_empty() {
        host.dispatch(stale.into_iter().map(FoldEffect::Unfold).collect());
    }
    host.dispatch(exact.into_iter().map(FoldEffect::Fold).collect());
    ToggleOutcome::Folded
}
