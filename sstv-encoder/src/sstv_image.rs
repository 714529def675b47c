// Copyright 2025 BenderBlog Rodriguez and Contributors.
// SPDX-License-Identifier: 0BSD

use thiserror::Error;

use crate::color::Rgb;

#[derive(Error, Debug)]
pub enum ImageCreationError {
    #[error("Invalid image size {0}. Should be {1}")]
    VectorSize(usize, usize),
}

/// Read-only pixel source the encoder scans.
///
/// Row 0 is the top of the picture.
pub trait ImageSource {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// The pixel at `(x, y)`, every channel normalized to `[0, 1]`.
    fn pixel(&self, x: usize, y: usize) -> Rgb;
}

impl<I> ImageSource for &I
where
    I: ImageSource + ?Sized,
{
    #[inline]
    fn width(&self) -> usize {
        (**self).width()
    }

    #[inline]
    fn height(&self) -> usize {
        (**self).height()
    }

    #[inline]
    fn pixel(&self, x: usize, y: usize) -> Rgb {
        (**self).pixel(x, y)
    }
}

/// The image structure is just a one-demension vector of (r,g,b) values.
/// With width and height info.
#[derive(Clone, Debug)]
pub struct SstvImage {
    width: usize,
    height: usize,
    image: Vec<[u8; 3]>,
}

impl SstvImage {
    /// Generate a new SstvImage.
    ///
    /// Will return an error if the size of the picture is not match with your input.
    pub fn new(
        width: usize,
        height: usize,
        image: Vec<[u8; 3]>,
    ) -> Result<Self, ImageCreationError> {
        if image.len() != width * height {
            return Err(ImageCreationError::VectorSize(image.len(), width * height));
        }

        Ok(Self {
            width,
            height,
            image,
        })
    }

    /// An image of a single color.
    pub fn filled(width: usize, height: usize, rgb: [u8; 3]) -> Self {
        Self {
            width,
            height,
            image: vec![rgb; width * height],
        }
    }

    /// Generate a new SstvImage from DynamicImage, image feature should be enabled first.
    #[cfg(feature = "image")]
    pub fn from_image(image: &image::DynamicImage) -> Result<Self, ImageCreationError> {
        let rgb_image = image.to_rgb8();
        let (width, height) = rgb_image.dimensions();
        let pixels = rgb_image.pixels().map(|p| p.0).collect();
        Self::new(width as usize, height as usize, pixels)
    }

    /// Get the pixel at the (x,y) position, with [R, G, B] values.
    pub fn get_rgb_pixel(&self, x: usize, y: usize) -> [u8; 3] {
        self.image[y * self.width + x]
    }

    /// Resize the image to the new_width and new_height, with the nearest-neighbor
    /// interpolation algorithm.
    pub fn resize_image(&self, new_width: usize, new_height: usize) -> Self {
        let mut resized_img: Vec<[u8; 3]> = vec![[0, 0, 0]; new_width * new_height];
        if self.width == 0 || self.height == 0 {
            return Self {
                width: new_width,
                height: new_height,
                image: resized_img,
            };
        }

        for y in 0..new_height {
            for x in 0..new_width {
                // Calculate the corresponding position in the original image
                let orig_x = (x as f32 * self.width as f32 / new_width as f32)
                    .min(self.width as f32 - 1.0)
                    .round() as usize;
                let orig_y = (y as f32 * self.height as f32 / new_height as f32)
                    .min(self.height as f32 - 1.0)
                    .round() as usize;

                resized_img[y * new_width + x] = self.get_rgb_pixel(orig_x, orig_y);
            }
        }

        Self {
            width: new_width,
            height: new_height,
            image: resized_img,
        }
    }
}

impl ImageSource for SstvImage {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn pixel(&self, x: usize, y: usize) -> Rgb {
        self.get_rgb_pixel(x, y).map(|v| v as f32 / 255.0)
    }
}

#[cfg(feature = "image")]
impl ImageSource for image::RgbImage {
    #[inline]
    fn width(&self) -> usize {
        self.dimensions().0 as usize
    }

    #[inline]
    fn height(&self) -> usize {
        self.dimensions().1 as usize
    }

    #[inline]
    fn pixel(&self, x: usize, y: usize) -> Rgb {
        self.get_pixel(x as u32, y as u32).0.map(|v| v as f32 / 255.0)
    }
}
