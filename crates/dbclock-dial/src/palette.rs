use dbclock_engine::paint::Color;

/// Colors of the five face layers.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    /// Backdrop disc. Translucent by default so the desktop shows through.
    pub dial: Color,
    pub ticks: Color,
    /// Hour and minute hands.
    pub hands: Color,
    pub seconds: Color,
    /// Hub covering the pivot.
    pub disc: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            dial: Color::from_srgb_u8(0xee, 0xee, 0xee, 0xbb), // #beee
            ticks: Color::from_srgb_u8(0x11, 0x11, 0x11, 0xff),
            hands: Color::from_srgb_u8(0x22, 0x22, 0x22, 0xff),
            seconds: Color::from_srgb_u8(0xcc, 0x00, 0x00, 0xff),
            disc: Color::from_srgb_u8(0x33, 0x33, 0x33, 0xff),
        }
    }
}
