use std::env;

fn main() {
    vergen::EmitBuilder::builder()
        .build_timestamp()
        .cargo_target_triple()
        .emit_and_set()
        .unwrap();

    // Must match `version::APP_VERSION`.
    let build = 3;

    let version = env::var("CARGO_PKG_VERSION").unwrap();
    let timestamp = env::var("VERGEN_BUILD_TIMESTAMP").unwrap();
    let target = env::var("VERGEN_CARGO_TARGET_TRIPLE").unwrap();

    let short_version = format!("{version}.{build} ({timestamp})");
    println!("cargo:rustc-env=SHORT_VERSION={short_version}");

    let long_version = [
        format!("Version: {version}.{build}"),
        format!("Build Timestamp: {timestamp}"),
        format!("Target: {target}"),
        format!("Build Profile: {}", env::var("PROFILE").unwrap()),
    ];
    for (i, line) in long_version.iter().enumerate() {
        println!("cargo:rustc-env=LONG_VERSION{i}={line}");
    }
}
