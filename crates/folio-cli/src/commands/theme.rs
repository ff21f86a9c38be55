use anyhow::{bail, Result};

use folio_core::theme::{FilePrefStore, ThemeMode, ThemePrefs};

fn prefs() -> ThemePrefs<FilePrefStore> {
    ThemePrefs::new(FilePrefStore::default_path())
}

pub fn get() -> Result<()> {
    println!("{}", prefs().stored().as_str());
    Ok(())
}

pub fn set(mode: &str) -> Result<()> {
    let Some(mode) = ThemeMode::parse(mode) else {
        bail!("unknown theme \"{mode}\", expected dark or light");
    };
    let mut prefs = prefs();
    prefs.apply(mode);
    println!("{}", mode.as_str());
    Ok(())
}

pub fn toggle() -> Result<()> {
    let mut prefs = prefs();
    let next = prefs.toggle();
    println!("{}", next.as_str());
    Ok(())
}
