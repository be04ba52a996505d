//! Configuration for rendering character sheets.

use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Where templates come from and where rendered sheets go.
#[derive(Debug, Clone)]
pub struct SheetConfig {
    /// The HTML template to fill in.
    pub template_path: PathBuf,
    /// Root characters directory of the campaign wiki.
    pub characters_dir: PathBuf,
    /// Non-player characters go under `non-player/`, players under `player/`.
    pub npc: bool,
    /// RNG seed for generated stats and hit points. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            template_path: PathBuf::from("characterTemplate.html"),
            characters_dir: PathBuf::from("characters"),
            npc: true,
            seed: None,
        }
    }
}

impl SheetConfig {
    /// Set the template path.
    pub fn with_template(mut self, path: impl Into<PathBuf>) -> Self {
        self.template_path = path.into();
        self
    }

    /// Set the characters directory.
    pub fn with_characters_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.characters_dir = dir.into();
        self
    }

    /// Choose between the non-player and player subfolders.
    pub fn with_npc(mut self, npc: bool) -> Self {
        self.npc = npc;
        self
    }

    /// Set the RNG seed for reproducible stats.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Directory rendered sheets are written to.
    pub fn output_dir(&self) -> PathBuf {
        let sub = if self.npc { "non-player" } else { "player" };
        self.characters_dir.join(sub)
    }

    /// Directory portraits are copied to.
    pub fn image_dir(&self) -> PathBuf {
        self.output_dir().join("img")
    }

    /// Path of the rendered sheet for a given file name.
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir().join(Path::new(file_name))
    }

    /// Build the random source described by this config.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = SheetConfig::default();
        assert_eq!(cfg.template_path, PathBuf::from("characterTemplate.html"));
        assert!(cfg.npc);
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.output_dir(), PathBuf::from("characters/non-player"));
    }

    #[test]
    fn builder_methods() {
        let cfg = SheetConfig::default()
            .with_template("t.html")
            .with_characters_dir("wiki/characters")
            .with_npc(false)
            .with_seed(4);
        assert_eq!(cfg.template_path, PathBuf::from("t.html"));
        assert_eq!(cfg.seed, Some(4));
        assert_eq!(cfg.output_dir(), PathBuf::from("wiki/characters/player"));
        assert_eq!(cfg.image_dir(), PathBuf::from("wiki/characters/player/img"));
        assert_eq!(
            cfg.output_path("kael.html"),
            PathBuf::from("wiki/characters/player/kael.html")
        );
    }
}
