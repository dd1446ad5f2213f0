use extractors::{
    FacebookExtractor, InstagramExtractor, TiktokExtractor, TwitterExtractor, YoutubeExtractor,
};
use socmed_types::{ExtractionError, Platform, PlatformExtractor};

/// Ordered set of platform extractors, one per platform.
///
/// Built once and then only read. Iteration order is registration order, which
/// also decides file-name detection and batch order.
pub struct ExtractorRegistry {
    extractors: Vec<Box<dyn PlatformExtractor>>,
}

impl ExtractorRegistry {
    pub fn new() -> Self {
        Self {
            extractors: Vec::new(),
        }
    }

    /// All built-in extractors: twitter, instagram, tiktok, facebook, youtube
    pub fn with_defaults() -> Self {
        Self::new()
            .register(Box::new(TwitterExtractor::new()))
            .register(Box::new(InstagramExtractor::new()))
            .register(Box::new(TiktokExtractor::new()))
            .register(Box::new(FacebookExtractor::new()))
            .register(Box::new(YoutubeExtractor::new()))
    }

    /// Add an extractor. One registered for the same platform is replaced in place.
    pub fn register(mut self, extractor: Box<dyn PlatformExtractor>) -> Self {
        let platform = extractor.platform();
        match self.extractors.iter().position(|e| e.platform() == platform) {
            Some(index) => self.extractors[index] = extractor,
            None => self.extractors.push(extractor),
        }
        self
    }

    pub fn get(&self, platform: Platform) -> Option<&dyn PlatformExtractor> {
        self.extractors
            .iter()
            .find(|e| e.platform() == platform)
            .map(|e| e.as_ref())
    }

    /// Resolve a platform name (case-insensitive) to its extractor
    pub fn lookup(&self, name: &str) -> Result<&dyn PlatformExtractor, ExtractionError> {
        let wanted = name.trim().to_lowercase();
        self.extractors
            .iter()
            .find(|e| e.platform().as_str() == wanted)
            .map(|e| e.as_ref())
            .ok_or_else(|| ExtractionError::UnsupportedPlatform {
                platform: name.to_string(),
                supported: self.names(),
            })
    }

    pub fn platforms(&self) -> Vec<Platform> {
        self.extractors.iter().map(|e| e.platform()).collect()
    }

    pub fn names(&self) -> Vec<String> {
        self.extractors
            .iter()
            .map(|e| e.platform().as_str().to_string())
            .collect()
    }

    /// First registered platform whose name appears in the lowercased file name
    pub fn detect(&self, file_name: &str) -> Option<Platform> {
        let lower = file_name.to_lowercase();
        self.platforms()
            .into_iter()
            .find(|p| lower.contains(p.as_str()))
    }

    pub fn len(&self) -> usize {
        self.extractors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
