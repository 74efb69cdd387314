const GLOW_RADIUS_PX: u32 = 600;
const GLOW_COLOR: &str = "rgba(80, 120, 255, 0.10)";

/// Last observed pointer location, viewport-relative. Feeds the decorative
/// background glow and nothing else.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    pub fn moved_to(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn glow_style(&self) -> String {
        format!(
            "background: radial-gradient({GLOW_RADIUS_PX}px at {}px {}px, {GLOW_COLOR}, transparent 80%); transition: background 0.1s;",
            self.x, self.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_origin() {
        assert_eq!(PointerPosition::default(), PointerPosition { x: 0, y: 0 });
    }

    #[test]
    fn latest_move_wins() {
        let moves = [(12, 40), (300, 8), (640, 512)];
        let mut position = PointerPosition::default();
        for (x, y) in moves {
            position = PointerPosition::moved_to(x, y);
        }
        assert_eq!(position, PointerPosition { x: 640, y: 512 });
    }

    #[test]
    fn glow_style_centers_on_position() {
        let style = PointerPosition::moved_to(640, 512).glow_style();
        assert!(style.contains("at 640px 512px"));
        assert!(style.contains("radial-gradient(600px"));
    }
}
