// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the picker, following the W3C Design Tokens
naming.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use curtain_picker::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let scrim = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};
let gap = spacing::XXS;
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use iced::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
}

// ============================================================================
// Spacing
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    pub const TOAST_WIDTH: f32 = 320.0;

    /// Grab handle drawn at the bottom of the curtain.
    pub const HANDLE_WIDTH: f32 = 40.0;
    pub const HANDLE_HEIGHT: f32 = 4.0;

    /// Gap between thumbnails.
    pub const GRID_GAP: f32 = 2.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

/// Translucent black used behind text drawn over images.
#[must_use]
pub fn scrim() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..palette::BLACK
    }
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
    assert!(opacity::OVERLAY_MEDIUM < opacity::OVERLAY_STRONG);

    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(sizing::HANDLE_WIDTH > sizing::HANDLE_HEIGHT);
};
