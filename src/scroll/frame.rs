/// Coalesces wheel input to at most one scroll adjustment per animation frame.
///
/// The first delta after a frame asks the caller to request a frame; deltas
/// arriving before that frame runs are summed into the pending one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameGate {
    pending: Option<(f64, f64)>,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a `(dx, dy)` delta. Returns `true` if a new frame must be requested.
    pub fn push(&mut self, dx: f64, dy: f64) -> bool {
        let dx = finite_or_zero(dx);
        let dy = finite_or_zero(dy);
        match &mut self.pending {
            Some((px, py)) => {
                *px += dx;
                *py += dy;
                false
            }
            None => {
                self.pending = Some((dx, dy));
                true
            }
        }
    }

    /// True while a frame has been requested but not run
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the accumulated delta when the frame runs
    pub fn take(&mut self) -> Option<(f64, f64)> {
        self.pending.take()
    }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}
