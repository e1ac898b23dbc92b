//! Joining two wall rings into one.
//!
//! The main ring is copied up to and including its exit point, then the
//! branch ring is inserted from its entry point around to its exit point
//! (wrapping past its end if needed), then the main ring resumes at its
//! re-entry point. Main points strictly between exit and re-entry are dropped.

use tracing::debug;

use super::{WallPointId, WallSequence};
use crate::error::{DesignerError, Result};

/// The four named points where a branch ring joins the main ring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seam {
    /// Last main point before the branch
    pub exit: WallPointId,
    /// First branch point
    pub entry: WallPointId,
    /// Last branch point
    pub branch_exit: WallPointId,
    /// First main point after the branch
    pub reentry: WallPointId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpliceState {
    BeforeSeam,
    InSeam,
    AfterSeam,
}

fn locate(sequence: &WallSequence, id: &WallPointId, name: &'static str) -> Result<usize> {
    sequence
        .position(id)
        .ok_or_else(|| DesignerError::SeamPointNotFound {
            id: id.to_string(),
            sequence: name,
        })
}

/// Splice `branch` into `main` at `seam`
pub fn splice(main: &WallSequence, branch: &WallSequence, seam: &Seam) -> Result<WallSequence> {
    let exit = locate(main, &seam.exit, "main")?;
    let reentry = locate(main, &seam.reentry, "main")?;
    let entry = locate(branch, &seam.entry, "branch")?;
    let branch_exit = locate(branch, &seam.branch_exit, "branch")?;

    if exit >= reentry {
        return Err(DesignerError::InvalidSeam {
            exit: seam.exit.to_string(),
            reentry: seam.reentry.to_string(),
        });
    }

    let branch_len = branch.len();
    let span = (branch_exit + branch_len - entry) % branch_len + 1;
    let branch_points = branch.points();

    let mut out = WallSequence::new();
    let mut state = SpliceState::BeforeSeam;
    for (i, point) in main.iter().enumerate() {
        match state {
            SpliceState::BeforeSeam => {
                out.push(point.clone());
                if i == exit {
                    for k in 0..span {
                        out.push(branch_points[(entry + k) % branch_len].clone());
                    }
                    state = SpliceState::InSeam;
                }
            }
            SpliceState::InSeam => {
                if i == reentry {
                    out.push(point.clone());
                    state = SpliceState::AfterSeam;
                }
            }
            SpliceState::AfterSeam => out.push(point.clone()),
        }
    }

    debug!(
        "Spliced {} branch points between {} and {} ({} points total)",
        span,
        seam.exit,
        seam.reentry,
        out.len()
    );
    Ok(out)
}
