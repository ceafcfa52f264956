//! Axis-aligned collision tests
//!
//! Every entity pair is a plain AABB overlap except the wall case, where the
//! player must thread the vertical gap between the two segments.

use super::state::{Bonus, Obstacle, ObstacleBody, Player};

/// AABB overlap between two top-left-anchored rectangles
#[inline]
pub fn aabb_overlap(
    ax: f32,
    ay: f32,
    aw: f32,
    ah: f32,
    bx: f32,
    by: f32,
    bw: f32,
    bh: f32,
) -> bool {
    ax + aw > bx && ax < bx + bw && ay + ah > by && ay < by + bh
}

/// Player vs obstacle, dispatching on the obstacle body
pub fn player_hits_obstacle(player: &Player, obstacle: &Obstacle) -> bool {
    match &obstacle.body {
        ObstacleBody::Wall { gap } => player_hits_wall(player, obstacle, *gap),
        _ => aabb_overlap(
            player.pos.x,
            player.pos.y,
            player.size,
            player.size,
            obstacle.pos.x,
            obstacle.pos.y,
            obstacle.width,
            obstacle.height,
        ),
    }
}

/// Gap-wall test: collision iff the spans overlap horizontally and the
/// player's vertical span is NOT fully inside the gap, or the player does
/// not fit through it at all.
fn player_hits_wall(player: &Player, wall: &Obstacle, gap: f32) -> bool {
    let horizontal_overlap =
        player.pos.x + player.size > wall.pos.x && player.pos.x < wall.pos.x + wall.width;
    if !horizontal_overlap {
        return false;
    }

    let gap_top = wall.pos.y + wall.height;
    let gap_bottom = gap_top + gap;
    let fully_in_gap = player.pos.y >= gap_top && player.pos.y + player.size <= gap_bottom;
    let fits_in_gap = player.size <= gap;

    !(fully_in_gap && fits_in_gap)
}

/// Player vs bonus (fixed square probe)
pub fn player_hits_bonus(player: &Player, bonus: &Bonus, bonus_size: f32) -> bool {
    aabb_overlap(
        player.pos.x,
        player.pos.y,
        player.size,
        player.size,
        bonus.pos.x,
        bonus.pos.y,
        bonus_size,
        bonus_size,
    )
}
