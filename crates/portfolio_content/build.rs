use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

const CONTENT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
struct PortfolioManifest {
    schema_version: u32,
    profile: ProfileManifest,
    #[serde(default)]
    wallpapers: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ProfileManifest {
    name: String,
    contact: ContactManifest,
}

#[derive(Debug, Deserialize)]
struct ContactManifest {
    email: String,
}

#[derive(Debug, Deserialize)]
struct BlogManifest {
    schema_version: u32,
    posts: Vec<PostManifest>,
}

#[derive(Debug, Deserialize)]
struct PostManifest {
    id: u32,
    title: String,
    content: String,
}

fn read_toml_as_json(path: &Path) -> Value {
    println!("cargo:rerun-if-changed={}", path.display());
    let raw = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    toml::from_str::<Value>(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()))
}

fn check_schema(path: &Path, found: u32) {
    if found != CONTENT_SCHEMA_VERSION {
        panic!(
            "content schema mismatch in {}: expected {CONTENT_SCHEMA_VERSION} found {found}",
            path.display()
        );
    }
}

fn validate_portfolio(path: &Path, json: &Value) {
    let manifest: PortfolioManifest = serde_json::from_value(json.clone())
        .unwrap_or_else(|err| panic!("invalid portfolio content in {}: {err}", path.display()));
    check_schema(path, manifest.schema_version);
    if manifest.profile.name.trim().is_empty() {
        panic!("profile name is empty in {}", path.display());
    }
    if !manifest.profile.contact.email.contains('@') {
        panic!(
            "profile contact email `{}` is not an address in {}",
            manifest.profile.contact.email,
            path.display()
        );
    }
    if manifest.wallpapers.is_empty() {
        panic!("at least one wallpaper is required in {}", path.display());
    }
}

fn validate_blog(path: &Path, json: &Value) {
    let manifest: BlogManifest = serde_json::from_value(json.clone())
        .unwrap_or_else(|err| panic!("invalid blog content in {}: {err}", path.display()));
    check_schema(path, manifest.schema_version);
    let mut seen = BTreeSet::new();
    for post in &manifest.posts {
        if !seen.insert(post.id) {
            panic!("duplicate blog post id {} in {}", post.id, path.display());
        }
        if post.title.trim().is_empty() || post.content.trim().is_empty() {
            panic!("blog post {} has an empty title or body", post.id);
        }
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let content_dir = crate_root.join("content");

    let portfolio_path = content_dir.join("portfolio.toml");
    let portfolio = read_toml_as_json(&portfolio_path);
    validate_portfolio(&portfolio_path, &portfolio);

    let blog_path = content_dir.join("blog.toml");
    let blog = read_toml_as_json(&blog_path);
    validate_blog(&blog_path, &blog);

    let generated = format!(
        "/// Build-time generated portfolio content JSON.\n\
pub const PORTFOLIO_CONTENT_JSON: &str = r##\"{}\"##;\n\
/// Build-time generated blog content JSON.\n\
pub const BLOG_CONTENT_JSON: &str = r##\"{}\"##;\n",
        serde_json::to_string(&portfolio).expect("serialize portfolio content"),
        serde_json::to_string(&blog).expect("serialize blog content"),
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("content_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
