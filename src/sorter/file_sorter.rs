//! Moves the files of one directory into category folders by extension.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Folder a file is moved into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FileCategory {
    Images,
    Video,
    Documents,
    Audio,
    Archives,
    Others,
}

impl FileCategory {
    /// Category for a file extension (without the dot), ignoring case.
    pub fn from_extension(extension: &str) -> Self {
        match extension.to_lowercase().as_str() {
            "jpeg" | "jpg" | "png" | "svg" | "gif" | "bmp" => FileCategory::Images,
            "avi" | "mp4" | "mov" | "mkv" => FileCategory::Video,
            "doc" | "docx" | "txt" | "pdf" | "xlsx" | "pptx" | "csv" | "md" => {
                FileCategory::Documents
            }
            "mp3" | "ogg" | "wav" | "amr" | "flac" => FileCategory::Audio,
            "zip" | "gz" | "tar" | "rar" | "7z" => FileCategory::Archives,
            _ => FileCategory::Others,
        }
    }

    pub fn folder_name(&self) -> &'static str {
        match self {
            FileCategory::Images => "images",
            FileCategory::Video => "video",
            FileCategory::Documents => "documents",
            FileCategory::Audio => "audio",
            FileCategory::Archives => "archives",
            FileCategory::Others => "others",
        }
    }

    fn for_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map_or(FileCategory::Others, FileCategory::from_extension)
    }
}

/// Files moved per category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortReport {
    pub moved: BTreeMap<FileCategory, usize>,
}

impl SortReport {
    pub fn total(&self) -> usize {
        self.moved.values().sum()
    }

    pub fn count(&self, category: FileCategory) -> usize {
        self.moved.get(&category).copied().unwrap_or(0)
    }
}

impl fmt::Display for SortReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sorted {} file(s)", self.total())?;
        if !self.moved.is_empty() {
            let parts: Vec<String> = self
                .moved
                .iter()
                .map(|(category, count)| format!("{}: {}", category.folder_name(), count))
                .collect();
            write!(f, " ({})", parts.join(", "))?;
        }
        Ok(())
    }
}

/// Sorts the regular files directly inside `root` into category folders.
///
/// Sub-directories (including the category folders themselves) are not touched.
pub struct FileSorter {
    root: PathBuf,
}

impl FileSorter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Move every file into its category folder.
    ///
    /// # Errors
    ///
    /// Fails if `root` is not a directory or a move fails; files moved before
    /// the failure stay moved.
    pub fn sort_files(&self) -> io::Result<SortReport> {
        if !self.root.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} is not a directory", self.root.display()),
            ));
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                files.push(entry.path());
            }
        }
        files.sort();

        let mut report = SortReport::default();
        for file in files {
            let category = FileCategory::for_path(&file);
            let folder = self.root.join(category.folder_name());
            fs::create_dir_all(&folder)?;

            let target = Self::free_target(&folder, &file);
            fs::rename(&file, &target)?;
            debug!(from = %file.display(), to = %target.display(), "File moved");
            *report.moved.entry(category).or_insert(0) += 1;
        }

        info!(root = %self.root.display(), moved = report.total(), "Directory sorted");
        Ok(report)
    }

    // First `name`, `name_1`, `name_2`, ... not already taken in `folder`
    fn free_target(folder: &Path, file: &Path) -> PathBuf {
        let file_name = file.file_name().map(PathBuf::from).unwrap_or_default();
        let candidate = folder.join(&file_name);
        if !candidate.exists() {
            return candidate;
        }

        let stem = file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = file
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();

        (1..)
            .map(|n| folder.join(format!("{}_{}{}", stem, n, extension)))
            .find(|path| !path.exists())
            .unwrap_or(candidate)
    }
}
