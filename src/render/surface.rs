/// 8-bit RGBA colour, independent of any windowing crate
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Opaque colour from `0xRRGGBB`
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: (rgb >> 16) as u8,
            g: (rgb >> 8) as u8,
            b: rgb as u8,
            a: 0xff,
        }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// Minimal drawing target. Coordinates are logical canvas pixels.
pub trait Surface {
    fn clear(&mut self, color: Rgba);

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba);

    /// `rotation` is in radians, clockwise in screen space
    fn fill_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, rotation: f32, color: Rgba);

    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Rgba) {
        self.fill_ellipse(cx, cy, r, r, 0.0, color);
    }

    fn stroke_path(&mut self, points: &[(f32, f32)], thickness: f32, color: Rgba);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear(Rgba),
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Rgba,
    },
    Ellipse {
        cx: f32,
        cy: f32,
        rx: f32,
        ry: f32,
        rotation: f32,
        color: Rgba,
    },
    Path {
        points: Vec<(f32, f32)>,
        thickness: f32,
        color: Rgba,
    },
}

/// Recorded drawing commands. Painting into one and replaying it later lets
/// the frame loop repaint only after a tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    cmds: Vec<DrawCmd>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCmd] {
        &self.cmds
    }

    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    pub fn replay(&self, target: &mut impl Surface) {
        for cmd in &self.cmds {
            match cmd {
                DrawCmd::Clear(color) => target.clear(*color),
                DrawCmd::Rect { x, y, w, h, color } => target.fill_rect(*x, *y, *w, *h, *color),
                DrawCmd::Ellipse {
                    cx,
                    cy,
                    rx,
                    ry,
                    rotation,
                    color,
                } => target.fill_ellipse(*cx, *cy, *rx, *ry, *rotation, *color),
                DrawCmd::Path {
                    points,
                    thickness,
                    color,
                } => target.stroke_path(points, *thickness, *color),
            }
        }
    }
}

impl Surface for DisplayList {
    fn clear(&mut self, color: Rgba) {
        self.cmds.clear();
        self.cmds.push(DrawCmd::Clear(color));
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) {
        self.cmds.push(DrawCmd::Rect { x, y, w, h, color });
    }

    fn fill_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, rotation: f32, color: Rgba) {
        self.cmds.push(DrawCmd::Ellipse {
            cx,
            cy,
            rx,
            ry,
            rotation,
            color,
        });
    }

    fn stroke_path(&mut self, points: &[(f32, f32)], thickness: f32, color: Rgba) {
        self.cmds.push(DrawCmd::Path {
            points: points.to_vec(),
            thickness,
            color,
        });
    }
}
