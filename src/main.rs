use std::path::Path;
use anyhow::{bail, Context};
use tile_behaviors::behavior::{BehaviorMap, TileBehavior};
use tile_behaviors::map::{Tileset, TmxLoader, TsxLoader};
use tile_behaviors::LoaderConfig;

/// Validates a tileset (.tsx) or the tilesets of a map (.tmx) and prints the typed behaviors.
/// Usage: tilecheck <file.tsx|file.tmx> [config.yaml]
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        bail!("Usage: tilecheck <file.tsx|file.tmx> [config.yaml]");
    };
    let config = match args.next() {
        Some(config_path) => LoaderConfig::load(&config_path)
            .with_context(|| format!("Failed to read config {config_path}"))?,
        None => LoaderConfig::default(),
    };

    let tilesets = load_tilesets(Path::new(&path), &config)
        .with_context(|| format!("Failed to load {path}"))?;
    let behaviors = BehaviorMap::build_all(&tilesets, &config)
        .with_context(|| format!("Failed to type tiles of {path}"))?;

    for tileset in &tilesets {
        println!("{} (first gid {})", tileset.name, tileset.first_gid);
    }
    for (gid, behavior) in behaviors.sorted() {
        println!("  {gid:>6}  {}", describe(&behavior));
    }
    log::debug!("{} tiles typed across {} tilesets", behaviors.len(), tilesets.len());
    Ok(())
}

fn load_tilesets(path: &Path, config: &LoaderConfig) -> anyhow::Result<Vec<Tileset>> {
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or_default();
    let tsx_loader = TsxLoader::new(config.clone());
    let tmx_loader = TmxLoader::new(config.clone());
    if tsx_loader.extensions().contains(&extension) {
        Ok(vec![tsx_loader.load_path(path)?])
    }
    else if tmx_loader.extensions().contains(&extension) {
        Ok(tmx_loader.load_path(path)?)
    }
    else {
        bail!("Unsupported extension '{extension}'")
    }
}

fn describe(behavior: &TileBehavior) -> String {
    let name = behavior.type_name().unwrap_or("solid");
    match behavior {
        TileBehavior::None | TileBehavior::Exit => String::from(name),
        TileBehavior::Bounce { velocity } => format!("{name} velocity={velocity}"),
        TileBehavior::Kill { respawn, facing, unit } => {
            format!("{name} respawn=({}, {}) facing={facing:?} unit={unit:?}", respawn.x, respawn.y)
        },
    }
}
