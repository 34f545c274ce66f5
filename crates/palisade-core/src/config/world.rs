//! Per-world configuration.
//!
//! One TOML file per world under the worlds directory. Loading a missing
//! file creates it with defaults; loading an existing file fills any
//! missing keys with defaults and writes the completed file back, so every
//! world file on disk is always fully populated.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::GameMode;
use crate::error::Result;

/* Default natural-spawn allow-lists. */
const ANIMALS: &[&str] = &[
    "Bat", "Chicken", "Cow", "Mooshroom", "Ocelot", "Pig", "Sheep", "Wolf", "Horse",
];
const WATER_ANIMALS: &[&str] = &["Squid"];
const MONSTERS: &[&str] = &[
    "Enderman", "PigZombie", "Blaze", "CaveSpider", "Creeper", "Ghast", "MagmaCube",
    "SilverFish", "Skeleton", "Slime", "Spider", "Witch", "Zombie", "Wither",
    "EnderDragon", "GiantZombie",
];
const GOLEMS: &[&str] = &["IronGolem", "Snowman"];

/* Default block-id lists. */
const ENDER_BLOCKS: &[i32] = &[2, 3, 12, 13, 37, 38, 39, 40, 46, 81, 82, 86, 103, 110];
const DISALLOWED_BLOCKS: &[i32] = &[7, 8, 9, 10, 11, 46, 51, 52];

/// Settings for a single world.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct WorldConfig {
    pub world_name: String,
    pub world_type: String,
    pub spawn_protection: u32,
    pub max_build_height: u32,
    pub generate_structures: bool,
    pub generator_settings: String,
    pub world_seed: String,

    pub startup_autoload: bool,
    pub warp_autoload: bool,

    pub allow_nether: bool,
    pub allow_end: bool,
    pub allow_flight: bool,

    pub pvp: bool,
    pub difficulty: u8,
    pub game_mode: GameMode,
    pub force_default_game_mode: bool,
    pub force_default_game_mode_dimensional: bool,
    pub auto_heal: String,
    pub enable_experience: bool,
    pub enable_health: bool,

    pub spawn_villagers: bool,
    pub spawn_golems: bool,
    pub spawn_animals: bool,
    pub spawn_monsters: bool,
    pub natural_animals: Vec<String>,
    pub natural_monsters: Vec<String>,
    pub natural_golems: Vec<String>,
    pub natural_water_animals: Vec<String>,
    pub natural_spawn_rate: u32,

    pub ender_blocks: Vec<i32>,
    pub disallowed_blocks: Vec<i32>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            world_name: String::new(),
            world_type: "DEFAULT".to_string(),
            spawn_protection: 16,
            max_build_height: 256,
            generate_structures: true,
            generator_settings: String::new(),
            world_seed: String::new(),
            startup_autoload: false,
            warp_autoload: false,
            allow_nether: true,
            allow_end: true,
            allow_flight: true,
            pvp: true,
            difficulty: 1,
            game_mode: GameMode::Survival,
            force_default_game_mode: true,
            force_default_game_mode_dimensional: false,
            auto_heal: "default".to_string(),
            enable_experience: true,
            enable_health: true,
            spawn_villagers: true,
            spawn_golems: true,
            spawn_animals: true,
            spawn_monsters: true,
            natural_animals: to_strings(ANIMALS),
            natural_monsters: to_strings(MONSTERS),
            natural_golems: to_strings(GOLEMS),
            natural_water_animals: to_strings(WATER_ANIMALS),
            natural_spawn_rate: 100,
            ender_blocks: ENDER_BLOCKS.to_vec(),
            disallowed_blocks: DISALLOWED_BLOCKS.to_vec(),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

/// File-backed configuration for one world.
///
/// The allow-lists are read into sets once per (re)load; membership checks
/// during spawning are hot.
#[derive(Debug)]
pub struct WorldConfiguration {
    path: PathBuf,
    config: WorldConfig,
    spawnable_animals: HashSet<String>,
    spawnable_monsters: HashSet<String>,
    spawnable_golems: HashSet<String>,
    spawnable_water_animals: HashSet<String>,
}

impl WorldConfiguration {
    /// Load the configuration for `world_name` from `worlds_dir`.
    ///
    /// A missing file is created with defaults; an existing one is
    /// completed with defaults for any missing keys and written back.
    pub fn load(worlds_dir: &Path, world_name: &str) -> Result<Self> {
        let path = worlds_dir.join(format!("{world_name}.toml"));
        let config = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let mut config: WorldConfig = toml::from_str(&content)?;
            if config.world_name.is_empty() {
                config.world_name = world_name.to_string();
            }
            config
        } else {
            info!(world = world_name, path = %path.display(), "no world configuration found, creating default");
            WorldConfig {
                world_name: world_name.to_string(),
                ..WorldConfig::default()
            }
        };

        let mut loaded = Self {
            path,
            config,
            spawnable_animals: HashSet::new(),
            spawnable_monsters: HashSet::new(),
            spawnable_golems: HashSet::new(),
            spawnable_water_animals: HashSet::new(),
        };
        loaded.rebuild_spawn_sets();
        loaded.save()?;
        Ok(loaded)
    }

    /// Re-read the file, replacing any in-memory state.
    pub fn reload(&mut self) -> Result<()> {
        if self.path.exists() {
            let content = std::fs::read_to_string(&self.path)?;
            let mut config: WorldConfig = toml::from_str(&content)?;
            if config.world_name.is_empty() {
                config.world_name = std::mem::take(&mut self.config.world_name);
            }
            self.config = config;
        }
        self.rebuild_spawn_sets();
        self.save()
    }

    /// Write the current (fully populated) configuration to disk.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(&self.config)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn world_name(&self) -> &str {
        &self.config.world_name
    }

    pub fn is_animal_spawnable(&self, name: &str) -> bool {
        self.spawnable_animals.contains(name)
    }

    pub fn is_monster_spawnable(&self, name: &str) -> bool {
        self.spawnable_monsters.contains(name)
    }

    pub fn is_golem_spawnable(&self, name: &str) -> bool {
        self.spawnable_golems.contains(name)
    }

    pub fn is_water_animal_spawnable(&self, name: &str) -> bool {
        self.spawnable_water_animals.contains(name)
    }

    pub fn is_ender_block(&self, id: i32) -> bool {
        self.config.ender_blocks.contains(&id)
    }

    pub fn is_block_disallowed(&self, id: i32) -> bool {
        self.config.disallowed_blocks.contains(&id)
    }

    fn rebuild_spawn_sets(&mut self) {
        self.spawnable_animals = self.config.natural_animals.iter().cloned().collect();
        self.spawnable_monsters = self.config.natural_monsters.iter().cloned().collect();
        self.spawnable_golems = self.config.natural_golems.iter().cloned().collect();
        self.spawnable_water_animals =
            self.config.natural_water_animals.iter().cloned().collect();
    }
}
