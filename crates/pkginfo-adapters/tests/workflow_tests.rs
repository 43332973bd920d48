//! End-to-end service wiring with the real adapters.

use std::path::Path;

use pkginfo_adapters::{BuiltinTemplate, LocalFilesystem, MemoryFilesystem, SimpleRenderer, TomlCodec};
use pkginfo_core::prelude::*;

fn package() -> PackageInfo {
    PackageInfo::builder()
        .name("widget")
        .version(SemanticVersion::must_parse("0.4.1"))
        .description("Makes widgets")
        .tenant("acme")
        .repo("https://example.com/acme/widget")
        .build()
        .unwrap()
}

#[test]
fn init_then_readme_in_memory() {
    let fs = MemoryFilesystem::new();
    let packages = PackageService::new(Box::new(fs.clone()), Box::new(TomlCodec));
    let readme = ReadmeService::new(Box::new(fs.clone()), Box::new(SimpleRenderer::strict()));

    packages.save(Path::new("pkg.info"), &package(), false).unwrap();
    let stored = fs.read_file(Path::new("pkg.info")).unwrap();
    assert!(stored.starts_with("# widget pkg.info file"));

    let info = packages.load(Path::new("pkg.info")).unwrap();
    readme
        .generate(
            &info,
            "assets/icon.png",
            BuiltinTemplate::Standard.content(),
            Path::new("README.md"),
            false,
        )
        .unwrap();

    let text = fs.read_file(Path::new("README.md")).unwrap();
    assert!(text.contains("# WIDGET"));
    assert!(text.contains("version-0.4.1-blue"));
    assert!(text.contains("| Architectures | local"));
    assert!(text.contains(r#"<img src="assets/icon.png""#));
    assert!(!text.contains("{{"));
}

#[test]
fn bump_rewrites_file_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pkg.info");
    let service = PackageService::new(Box::new(LocalFilesystem), Box::new(TomlCodec));

    service.save(&path, &package(), false).unwrap();
    let change = service.bump(&path, BumpLevel::Major).unwrap();
    assert_eq!(change.current.to_string(), "1.0.0");

    let on_disk = std::fs::read_to_string(&path).unwrap();
    assert!(on_disk.contains("version = \"1.0.0\""));
    assert!(on_disk.starts_with("# widget pkg.info file"));
}

#[test]
fn prerelease_then_release() {
    let fs = MemoryFilesystem::new();
    let service = PackageService::new(Box::new(fs), Box::new(TomlCodec));
    let path = Path::new("pkg.info");
    service.save(path, &package(), false).unwrap();

    let pre = service.set_prerelease(path, "rc.1").unwrap();
    assert_eq!(pre.current.to_string(), "0.4.1-rc.1");
    assert!(pre.current < pre.previous.inc_patch());

    let released = service.bump(path, BumpLevel::Patch).unwrap();
    assert_eq!(released.current.to_string(), "0.4.1");
}
