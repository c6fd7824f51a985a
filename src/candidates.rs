//! Candidate image path generation.
//!
//! Image files in the wild are named inconsistently (`Claire.png`,
//! `claire.PNG`, `claire.jpeg`, ...). Rather than make callers enumerate naming
//! conventions, [`CandidateUrls`] lazily yields every plausible path in a fixed
//! priority order:
//!
//! 1. exact identifier + preferred extension
//! 2. lowercased identifier + lowercased preferred extension
//! 3. exact identifier + each of [`FALLBACK_EXTENSIONS`]
//! 4. lowercased identifier + each of [`FALLBACK_EXTENSIONS`]
//!
//! Duplicates are not filtered; a repeated path is simply attempted again.

/// Extensions swept after the preferred extension, in order.
pub const FALLBACK_EXTENSIONS: &[&str] = &[
    ".png", ".PNG", ".jpg", ".JPG", ".jpeg", ".JPEG", ".webp", ".WEBP",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Preferred,
    PreferredLower,
    SweepExact(usize),
    SweepLower(usize),
    Done,
}

/// Lazy, ordered sequence of candidate image paths for one identifier.
#[derive(Debug, Clone)]
pub struct CandidateUrls {
    prefix: String,
    identifier: String,
    preferred: Option<String>,
    stage: Stage,
}

impl CandidateUrls {
    /// Creates the candidate sequence.
    ///
    /// # Arguments
    /// * `base` - Directory-like prefix; joined to the file name with a single `/`
    /// * `identifier` - Logical image name without extension
    /// * `preferred_extension` - Optional extension tried first, with or without the leading dot
    pub fn new(base: &str, identifier: &str, preferred_extension: Option<&str>) -> Self {
        let prefix = if base.is_empty() {
            String::new()
        } else {
            format!("{}/", base.trim_end_matches('/'))
        };
        let preferred = preferred_extension
            .map(str::trim)
            .filter(|ext| !ext.is_empty() && *ext != ".")
            .map(|ext| {
                if ext.starts_with('.') {
                    ext.to_string()
                } else {
                    format!(".{}", ext)
                }
            });
        let stage = if preferred.is_some() {
            Stage::Preferred
        } else {
            Stage::SweepExact(0)
        };

        Self {
            prefix,
            identifier: identifier.to_string(),
            preferred,
            stage,
        }
    }

    fn path(&self, name: &str, ext: &str) -> String {
        format!("{}{}{}", self.prefix, name, ext)
    }
}

impl Iterator for CandidateUrls {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            match self.stage {
                Stage::Preferred => {
                    self.stage = Stage::PreferredLower;
                    if let Some(ext) = &self.preferred {
                        return Some(self.path(&self.identifier, ext));
                    }
                }
                Stage::PreferredLower => {
                    self.stage = Stage::SweepExact(0);
                    if let Some(ext) = &self.preferred {
                        return Some(self.path(&self.identifier.to_lowercase(), &ext.to_lowercase()));
                    }
                }
                Stage::SweepExact(i) => {
                    if i >= FALLBACK_EXTENSIONS.len() {
                        self.stage = Stage::SweepLower(0);
                        continue;
                    }
                    self.stage = Stage::SweepExact(i + 1);
                    return Some(self.path(&self.identifier, FALLBACK_EXTENSIONS[i]));
                }
                Stage::SweepLower(i) => {
                    if i >= FALLBACK_EXTENSIONS.len() {
                        self.stage = Stage::Done;
                        continue;
                    }
                    self.stage = Stage::SweepLower(i + 1);
                    return Some(self.path(&self.identifier.to_lowercase(), FALLBACK_EXTENSIONS[i]));
                }
                Stage::Done => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferred_extension_comes_first() {
        let urls: Vec<String> = CandidateUrls::new("assets/images", "Claire", Some(".png")).collect();
        assert_eq!(urls[0], "assets/images/Claire.png");
        assert_eq!(urls[1], "assets/images/claire.png");
        assert_eq!(urls[2], "assets/images/Claire.png");
        assert_eq!(urls[3], "assets/images/Claire.PNG");
        assert_eq!(urls[9], "assets/images/Claire.WEBP");
        assert_eq!(urls[10], "assets/images/claire.png");
        assert_eq!(urls.last().unwrap(), "assets/images/claire.WEBP");
        assert_eq!(urls.len(), 2 + 2 * FALLBACK_EXTENSIONS.len());
    }

    #[test]
    fn test_without_preferred_extension_starts_sweep() {
        let urls: Vec<String> = CandidateUrls::new("img/", "Sam", None).collect();
        assert_eq!(urls.len(), 2 * FALLBACK_EXTENSIONS.len());
        assert_eq!(urls[0], "img/Sam.png");
        assert_eq!(urls[8], "img/sam.png");
    }

    #[test]
    fn test_extension_without_dot_is_normalized() {
        let mut urls = CandidateUrls::new("img", "Matt", Some("JPG"));
        assert_eq!(urls.next().as_deref(), Some("img/Matt.JPG"));
        assert_eq!(urls.next().as_deref(), Some("img/matt.jpg"));
    }

    #[test]
    fn test_empty_base_has_no_leading_slash() {
        let mut urls = CandidateUrls::new("", "kyran", None);
        assert_eq!(urls.next().as_deref(), Some("kyran.png"));
    }

    #[test]
    fn test_root_base_keeps_single_slash() {
        let mut urls = CandidateUrls::new("/", "kyran", None);
        assert_eq!(urls.next().as_deref(), Some("/kyran.png"));
    }
}
