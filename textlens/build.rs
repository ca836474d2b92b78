use anyhow::Result;
use std::path::Path;
use vergen::EmitBuilder;

pub fn main() -> Result<()> {
    let mut builder = EmitBuilder::builder();
    builder.all_build();

    // Git metadata is only available when building from a checkout, not from crates.io.
    if Path::new(".git").exists() || Path::new("../.git").exists() {
        builder.all_git();
    } else {
        println!("cargo:rustc-env=VERGEN_GIT_DESCRIBE=unknown");
        println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
        println!("cargo:rustc-env=VERGEN_GIT_COMMIT_DATE=unknown");
    }

    builder.emit()?;

    if let Ok(version) = std::env::var("VERSION") {
        println!("cargo:rustc-env=TEXTLENS_VERSION={}", version);
    } else {
        println!("cargo:rustc-env=TEXTLENS_VERSION={}", env!("CARGO_PKG_VERSION"));
    }
    Ok(())
}
