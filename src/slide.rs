use raylib::prelude::*;

pub struct Slide {
    image: Texture2D,
    pub src: String,
    pub caption: String,
}

impl Slide {
    pub fn new(image: Texture2D, src: String, caption: String) -> Self {
        Self { image, src, caption }
    }

    /// Scale that fits the texture inside `bounds` without upscaling.
    fn fit_scale(&self, bounds: Rectangle) -> f32 {
        let scale_x = bounds.width / self.image.width() as f32;
        let scale_y = bounds.height / self.image.height() as f32;
        scale_x.min(scale_y).min(1.0)
    }

    /// Draws the slide centered in `bounds`. Returns where it landed.
    pub fn draw(&self, d: &mut RaylibDrawHandle, bounds: Rectangle, tint: Color) -> Rectangle {
        let scale = self.fit_scale(bounds);
        let width = self.image.width() as f32 * scale;
        let height = self.image.height() as f32 * scale;
        let dest = Rectangle::new(
            bounds.x + (bounds.width - width) * 0.5,
            bounds.y + (bounds.height - height) * 0.5,
            width,
            height,
        );

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, self.image.width() as f32, self.image.height() as f32),
            dest,
            Vector2::new(0.0, 0.0),
            0.0,
            tint,
        );
        dest
    }
}
