//! JPEG XL encoding configuration types

/// libjxl effort ladder, fastest to slowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JxlEffort {
    Lightning,
    Thunder,
    Falcon,
    Cheetah,
    Hare,
    Wombat,
    Squirrel,
    Kitten,
    Tortoise,
}

/// Configuration for stack to JPEG XL conversion
#[derive(Debug, Clone)]
pub struct EncodeConfig {
    /// Perceptual quality, 0-100. 100 selects lossless encoding.
    pub quality: u8,
    /// Encoder effort (speed/density tradeoff)
    pub effort: JxlEffort,
    /// Whether to validate image dimensions before conversion
    pub validate_dimensions: bool,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            quality: 98,
            effort: JxlEffort::Squirrel,
            validate_dimensions: true,
        }
    }
}

impl EncodeConfig {
    pub fn builder() -> EncodeConfigBuilder {
        EncodeConfigBuilder::default()
    }

    pub fn is_lossless(&self) -> bool {
        self.quality >= 100
    }

    /// Butteraugli distance for the configured quality, using libjxl's own
    /// quality-to-distance curve.
    pub fn distance(&self) -> f32 {
        let quality = f32::from(self.quality);
        if quality >= 100.0 {
            0.0
        } else if quality >= 30.0 {
            0.1 + (100.0 - quality) * 0.09
        } else {
            53.0 / 3000.0 * quality * quality - 23.0 / 20.0 * quality + 25.0
        }
    }
}

/// Builder for EncodeConfig
#[derive(Default)]
pub struct EncodeConfigBuilder {
    quality: Option<u8>,
    effort: Option<JxlEffort>,
    validate_dimensions: Option<bool>,
}

impl EncodeConfigBuilder {
    pub fn quality(mut self, quality: u8) -> Self {
        self.quality = Some(quality);
        self
    }

    pub fn effort(mut self, effort: JxlEffort) -> Self {
        self.effort = Some(effort);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn build(self) -> EncodeConfig {
        let default = EncodeConfig::default();
        EncodeConfig {
            quality: self.quality.unwrap_or(default.quality),
            effort: self.effort.unwrap_or(default.effort),
            validate_dimensions: self
                .validate_dimensions
                .unwrap_or(default.validate_dimensions),
        }
    }
}
