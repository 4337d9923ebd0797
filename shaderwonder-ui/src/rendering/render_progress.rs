/// Progress of the current render pass.
///
/// One step is one painted tile, counted across every refinement level, so a
/// pass over a `w×h` surface has `total_refinement_tiles(w, h)` steps.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderProgress {
    pub completed_steps: u32,
    pub total_steps: u32,
    /// Side of the tiles currently being painted (0 before the first tile).
    pub tile_size: u32,
    pub elapsed_ms: f64,
    pub is_complete: bool,
}

impl RenderProgress {
    pub fn new(total_steps: u32) -> Self {
        Self {
            total_steps,
            ..Self::default()
        }
    }

    /// Record one painted tile of side `tile_size`.
    pub fn advance(&mut self, tile_size: u32) {
        self.completed_steps += 1;
        self.tile_size = tile_size;
    }

    /// True once the 1×1 level has started painting.
    pub fn at_full_resolution(&self) -> bool {
        self.tile_size == 1
    }

    /// Completion percentage (0.0 to 100.0).
    pub fn percentage(&self) -> f32 {
        if self.total_steps == 0 {
            0.0
        } else {
            (self.completed_steps as f32 / self.total_steps as f32) * 100.0
        }
    }
}
