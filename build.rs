fn main() {
    // Footer copyright year
    let year = chrono::Utc::now().format("%Y");
    println!("cargo:rustc-env=BUILD_YEAR={year}");

    // Release builds embed the content folder
    println!("cargo:rerun-if-changed=content");
    println!("cargo:rerun-if-changed=build.rs");
}
