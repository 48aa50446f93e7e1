fn main() {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Tapspan Desktop Example ===");
    println!("Replays a tap script against the greeting scene:");
    println!("  - \"you\" fires while enabled");
    println!("  - \"Nice\" disables \"you\", \"Hello\" enables it again");
    println!("  - decorations fade while their button is disabled");
    println!();
    println!("Set RUST_LOG=debug to see composition and hit resolution");
    println!();

    desktop_app::app::run_script();
}
