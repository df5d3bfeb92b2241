use mdsection_core::config::loader::default_config_path;
use mdsection_core::config::types::ResolvedConfig;

pub fn run(cfg: &ResolvedConfig) {
    println!("OK   mdsection doctor");
    match cfg.source {
        Some(ref p) => println!("path: {}", p.display()),
        None => println!("path: {} (not found, using defaults)", default_config_path().display()),
    }
    println!("editor.strip_trailing_whitespace: {}", cfg.editor.strip_trailing_whitespace);
    println!("logging.level: {}", cfg.logging.level);
    println!(
        "logging.file: {}",
        cfg.logging.file.as_ref().map_or_else(|| "(none)".to_string(), |p| p.display().to_string())
    );
    if let Some(ref level) = cfg.logging.file_level {
        println!("logging.file_level: {level}");
    }
}
