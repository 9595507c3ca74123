use std::fs;
use std::path::Path;

// Copies the trunk output into static/dist so include_dir can embed it.
// Without a build the directory is still created, leaving an empty bundle.
fn main() {
    let out_dir = Path::new("static");
    let bundle_dir = out_dir.join("dist");
    let dist_dir = Path::new("../frontend/dist");

    println!("cargo:rerun-if-changed=../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        if let Err(e) = fs::create_dir_all(out_dir) {
            panic!("cannot create {}: {e}", out_dir.display());
        }
        let options = fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true);
        if let Err(e) = fs_extra::dir::copy(dist_dir, &bundle_dir, &options) {
            println!("cargo:warning=frontend bundle not copied: {e}");
        }
    }

    if let Err(e) = fs::create_dir_all(&bundle_dir) {
        panic!("cannot create {}: {e}", bundle_dir.display());
    }
}
