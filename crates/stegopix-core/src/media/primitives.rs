/// the shape of a carrier image as seen by the embedding strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Geometry {
    pub width: usize,
    pub height: usize,
    /// number of color channels per pixel that carry payload bits
    pub channels: usize,
}

/// one color channel value of one pixel that carries a single payload bit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Site {
    pub x: usize,
    pub y: usize,
    pub channel: usize,
}

impl Geometry {
    pub fn new(width: usize, height: usize, channels: usize) -> Self {
        Self {
            width,
            height,
            channels,
        }
    }

    /// number of channel values in the whole image
    pub fn samples(&self) -> usize {
        self.width * self.height * self.channels
    }

    /// maps a row-major, channel-minor scan index back to its site
    pub fn site_at(&self, index: usize) -> Site {
        let row_len = self.width * self.channels;
        let y = index / row_len;
        let remainder = index - y * row_len;

        Site {
            x: remainder / self.channels,
            y,
            channel: remainder % self.channels,
        }
    }

    /// inverse of [`Geometry::site_at`]
    pub fn index_of(&self, site: &Site) -> usize {
        (site.y * self.width + site.x) * self.channels + site.channel
    }
}
