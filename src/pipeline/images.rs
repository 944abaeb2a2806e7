use crate::app::ports::HttpClientPort;
use crate::common::constants::DEFAULT_IMAGE_EXTENSION;
use crate::common::error::{Result, ScraperError};
use crate::common::types::Show;
use reqwest::Url;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, error, info, instrument};

/// Replace characters that are not allowed in file names on common filesystems
pub fn safe_file_stem(title: &str) -> String {
    title
        .chars()
        .map(|c| match c {
            '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            other => other,
        })
        .collect()
}

/// Extension of the URL path including the dot, `.jpg` when there is none
pub fn image_extension(url: &str) -> Result<String> {
    let parsed = Url::parse(url).map_err(|e| ScraperError::InvalidUrl {
        url: url.to_string(),
        message: e.to_string(),
    })?;
    let ext = Path::new(parsed.path())
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty())
        .map(|e| format!(".{e}"))
        .unwrap_or_else(|| DEFAULT_IMAGE_EXTENSION.to_string());
    Ok(ext)
}

/// Downloads show posters into one directory
pub struct ImageDownloader<'a> {
    http: &'a dyn HttpClientPort,
    images_dir: PathBuf,
    record_base: Option<PathBuf>,
}

impl<'a> ImageDownloader<'a> {
    pub fn new(http: &'a dyn HttpClientPort, images_dir: impl Into<PathBuf>) -> Self {
        Self {
            http,
            images_dir: images_dir.into(),
            record_base: None,
        }
    }

    /// Write record paths relative to `base` (usually the output file's
    /// directory) when the images directory lies under it.
    pub fn relative_to(mut self, base: impl Into<PathBuf>) -> Self {
        self.record_base = Some(base.into());
        self
    }

    /// Path written into `imagePath`, always `/`-separated
    fn record_path(&self, file_path: &Path) -> String {
        let relative = self
            .record_base
            .as_deref()
            .and_then(|base| file_path.strip_prefix(base).ok())
            .unwrap_or(file_path);
        let mut record = String::new();
        for component in relative.components() {
            if !record.is_empty() && !record.ends_with('/') {
                record.push('/');
            }
            match component {
                Component::RootDir if record.ends_with('/') => {}
                Component::RootDir => record.push('/'),
                other => record.push_str(&other.as_os_str().to_string_lossy()),
            }
        }
        record
    }

    fn ensure_image_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.images_dir)?;
        Ok(())
    }

    /// Download one image to `<images_dir>/<safe title><ext>` and return the
    /// path to record for it.
    pub async fn download(&self, title: &str, url: &str) -> Result<String> {
        let file_name = format!("{}{}", safe_file_stem(title), image_extension(url)?);
        let file_path = self.images_dir.join(&file_name);

        let response = self.http.get(url).await?;
        debug!("Image {} is {} ({} bytes)", url, response.content_type, response.bytes.len());
        if let Err(e) = fs::write(&file_path, &response.bytes) {
            let _ = fs::remove_file(&file_path);
            return Err(e.into());
        }

        info!("Downloaded image: {}", file_path.display());
        Ok(self.record_path(&file_path))
    }

    /// Download every show's image, setting `image_path` on success.
    ///
    /// Failures are logged per show and never abort the batch. Returns the
    /// number of images written.
    #[instrument(skip(self, shows), fields(shows = shows.len()))]
    pub async fn process_images(&self, shows: &mut [Show]) -> Result<usize> {
        self.ensure_image_dir()?;

        let mut downloaded = 0;
        for show in shows.iter_mut() {
            let Some(url) = show.image.clone() else {
                continue;
            };
            match self.download(&show.title, &url).await {
                Ok(path) => {
                    show.image_path = Some(path);
                    downloaded += 1;
                }
                Err(e) => {
                    error!("Failed to download image for {}: {}", show.title, e);
                }
            }
        }
        Ok(downloaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ports::HttpGetResult;
    use async_trait::async_trait;
    use tempfile::tempdir;

    struct PosterHttp;

    #[async_trait]
    impl HttpClientPort for PosterHttp {
        async fn get(&self, _url: &str) -> Result<HttpGetResult> {
            Ok(HttpGetResult {
                bytes: b"poster".to_vec(),
                content_type: "image/png".to_string(),
            })
        }
    }

    #[test]
    fn test_safe_file_stem() {
        assert_eq!(safe_file_stem("AC/DC: Tributo?"), "AC_DC_ Tributo_");
        assert_eq!(safe_file_stem(r#"<"a|b">\*"#), "__a_b____");
        assert_eq!(safe_file_stem("Bodas de sangre"), "Bodas de sangre");
    }

    #[test]
    fn test_image_extension() {
        assert_eq!(image_extension("https://x.es/a/poster.png").unwrap(), ".png");
        assert_eq!(image_extension("https://x.es/a/poster.jpeg?w=300").unwrap(), ".jpeg");
        assert_eq!(image_extension("https://x.es/a/poster").unwrap(), ".jpg");
        assert_eq!(image_extension("https://x.es/").unwrap(), ".jpg");
        assert!(image_extension("poster.png").is_err());
    }

    #[tokio::test]
    async fn test_record_path_follows_images_dir() {
        let temp_dir = tempdir().unwrap();
        let images_dir = temp_dir.path().join("posters");
        fs::create_dir_all(&images_dir).unwrap();

        let downloader = ImageDownloader::new(&PosterHttp, &images_dir).relative_to(temp_dir.path());
        let record = downloader.download("Hamlet", "https://x.es/h.png").await.unwrap();
        assert_eq!(record, "posters/Hamlet.png");
        assert_eq!(fs::read(temp_dir.path().join(&record)).unwrap(), b"poster");
    }

    #[tokio::test]
    async fn test_record_path_for_dir_without_final_name() {
        let temp_dir = tempdir().unwrap();
        fs::create_dir_all(temp_dir.path().join("posters")).unwrap();
        let images_dir = temp_dir.path().join("posters").join("..");

        let downloader = ImageDownloader::new(&PosterHttp, &images_dir).relative_to(temp_dir.path());
        let record = downloader.download("Hamlet", "https://x.es/h.png").await.unwrap();
        assert!(temp_dir.path().join("Hamlet.png").exists());
        assert_eq!(fs::read(temp_dir.path().join(&record)).unwrap(), b"poster");
        assert!(!record.starts_with("images/"));
    }

    #[tokio::test]
    async fn test_record_path_for_output_dir_itself() {
        let temp_dir = tempdir().unwrap();

        let downloader = ImageDownloader::new(&PosterHttp, temp_dir.path()).relative_to(temp_dir.path());
        let record = downloader.download("Hamlet", "https://x.es/h.png").await.unwrap();
        assert_eq!(record, "Hamlet.png");
        assert!(temp_dir.path().join("Hamlet.png").exists());
    }

    #[tokio::test]
    async fn test_record_path_without_base_keeps_dir_as_given() {
        let temp_dir = tempdir().unwrap();
        let images_dir = temp_dir.path().join("posters");
        fs::create_dir_all(&images_dir).unwrap();

        let downloader = ImageDownloader::new(&PosterHttp, &images_dir);
        let record = downloader.download("Hamlet", "https://x.es/h.png").await.unwrap();
        assert_eq!(fs::read(&record).unwrap(), b"poster");
    }
}
