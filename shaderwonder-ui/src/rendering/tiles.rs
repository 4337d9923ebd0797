use shaderwonder_core::PixelRect;

/// Side of the first (coarsest) refinement level.
///
/// Smallest power of two covering the longer surface edge, so level one is a
/// single tile.
pub fn initial_tile_size(width: u32, height: u32) -> u32 {
    width.max(height).next_power_of_two()
}

/// Tile sides for every refinement level, coarsest first, ending at 1.
pub fn refinement_sizes(width: u32, height: u32) -> impl Iterator<Item = u32> {
    std::iter::successors(Some(initial_tile_size(width, height)), |&side| {
        (side > 1).then_some(side / 2)
    })
}

/// Row-major grid of tiles covering the surface, clipped at the edges.
pub fn generate_tiles(width: u32, height: u32, tile_size: u32) -> impl Iterator<Item = PixelRect> {
    let step = tile_size.max(1) as usize;
    (0..height).step_by(step).flat_map(move |y| {
        (0..width)
            .step_by(step)
            .map(move |x| PixelRect::clipped_square(x, y, tile_size, (width, height)))
    })
}

/// Number of tiles in one level.
pub fn tile_count(width: u32, height: u32, tile_size: u32) -> u32 {
    width.div_ceil(tile_size) * height.div_ceil(tile_size)
}

/// Number of tiles painted by one complete pass over all levels.
pub fn total_refinement_tiles(width: u32, height: u32) -> u32 {
    refinement_sizes(width, height)
        .map(|side| tile_count(width, height, side))
        .sum()
}
