//! Parallax header math: a fixed-height header band that slides away at
//! half the scroll speed and stretches when the content overscrolls past
//! the top.

/// Transform applied to the header band for a given scroll offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxTransform {
    /// Upward displacement in rows; zero for upward/overscroll.
    pub translate_y: f32,
    /// Stretch factor; 1.0 except while overscrolling past the top.
    pub scale: f32,
}

pub fn transform(scroll_y: f32, header_height: f32) -> ParallaxTransform {
    let translate_y = if scroll_y > 0.0 { scroll_y * 0.5 } else { 0.0 };
    let scale = if scroll_y < 0.0 {
        1.0 - scroll_y / header_height
    } else {
        1.0
    };

    ParallaxTransform {
        translate_y,
        scale,
    }
}

/// Rows of the header still visible after the transform. Never negative.
pub fn header_rows(scroll_y: i32, header_height: u16) -> u16 {
    let t = transform(scroll_y as f32, f32::from(header_height));
    let visible = f32::from(header_height) * t.scale - t.translate_y;

    if visible <= 0.0 {
        0
    } else {
        visible.round() as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_at_rest_without_scroll() {
        let t = transform(0.0, 8.0);

        assert_eq!(t.translate_y, 0.0);
        assert_eq!(t.scale, 1.0);
        assert_eq!(header_rows(0, 8), 8);
    }

    #[test]
    fn downward_scroll_translates_at_half_speed_without_scaling() {
        let t = transform(6.0, 8.0);

        assert_eq!(t.translate_y, 3.0);
        assert_eq!(t.scale, 1.0);
        assert_eq!(header_rows(6, 8), 5);
    }

    #[test]
    fn overscroll_stretches_without_translating() {
        let t = transform(-8.0, 8.0);

        assert_eq!(t.translate_y, 0.0);
        assert_eq!(t.scale, 2.0);
        assert_eq!(header_rows(-8, 8), 16);
    }

    #[test]
    fn scale_never_drops_below_one() {
        for scroll in [-24, -8, -1, 0, 1, 8, 100] {
            let t = transform(scroll as f32, 8.0);
            assert!(t.scale >= 1.0, "scale must stay >= 1 at scroll {scroll}");
        }
    }

    #[test]
    fn deep_scroll_hides_the_header_without_going_negative() {
        assert_eq!(header_rows(16, 8), 0);
        assert_eq!(header_rows(500, 8), 0);
    }
}
