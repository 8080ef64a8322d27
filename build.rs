// Records the target triple so `--version` and the text heading can say which
// platform the binary was built for.
fn main() {
    let target = std::env::var("TARGET").unwrap_or_else(|_| "unknown".to_string());
    println!("cargo:rustc-env=DEPLOY_VARS_TARGET={target}");
    println!("cargo:rerun-if-changed=build.rs");
}
