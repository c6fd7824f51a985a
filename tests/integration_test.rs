use accordion::{
    BackgroundPosition, CandidateUrls, FsImageLoader, ImageResolver, ImageState, MenuManifest,
    PanelSet, ResolveOutcome, Viewport,
};
use anyhow::Result;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Fresh scratch directory under the system temp dir.
fn scratch_dir(name: &str) -> Result<PathBuf> {
    let dir = env::temp_dir().join(format!("accordion-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(dir.join("img"))?;
    Ok(dir)
}

fn write_png(path: &std::path::Path, width: u32, height: u32) -> Result<()> {
    let image = image::RgbaImage::from_pixel(width, height, image::Rgba([200, 100, 50, 255]));
    image.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

#[test]
fn test_resolves_from_disk_with_extension_sweep() -> Result<()> {
    let dir = scratch_dir("sweep")?;
    // Stored as PNG bytes under a .jpeg name; decoding goes by content
    write_png(&dir.join("img/Claire.jpeg"), 3, 2)?;

    let loader = FsImageLoader::new(&dir);
    let mut resolver = ImageResolver::new(CandidateUrls::new("img", "Claire", Some(".png")));
    let resolution = resolver.resolve(&loader);

    assert_eq!(resolution.outcome, ResolveOutcome::Resolved("img/Claire.jpeg".to_string()));
    let image = resolution.image.expect("winning candidate is decoded");
    assert_eq!(image.size, [3, 2]);
    assert_eq!(image.rgba.len(), 3 * 2 * 4);
    assert_eq!(resolution.attempted.first().map(String::as_str), Some("img/Claire.png"));

    fs::remove_dir_all(&dir)?;
    Ok(())
}

#[test]
fn test_unreadable_candidates_are_skipped() -> Result<()> {
    let dir = scratch_dir("corrupt")?;
    fs::write(dir.join("img/sam.png"), b"not really a png")?;
    write_png(&dir.join("img/sam.webp"), 1, 1)?;

    let loader = FsImageLoader::new(&dir);
    let mut resolver = ImageResolver::new(CandidateUrls::new("img", "sam", Some("png")));
    let resolution = resolver.resolve(&loader);

    assert_eq!(resolution.outcome, ResolveOutcome::Resolved("img/sam.webp".to_string()));

    fs::remove_dir_all(&dir)?;
    Ok(())
}

#[test]
fn test_manifest_to_layout() -> Result<()> {
    let dir = scratch_dir("manifest")?;
    let manifest_path = dir.join("menu.json");
    fs::write(
        &manifest_path,
        serde_json::json!({
            "config": { "collapsed_width": { "em": 4.0 }, "image_base": "img" },
            "panels": [
                { "label": "The Bizleys", "image_id": "bizleys", "scroll_offset": 420,
                  "preferred_extension": ".png",
                  "content": { "heading": "The Bizleys", "paragraphs": ["Hello"] } },
                { "label": "Sam", "image_id": "sam", "scroll_offset": 600 },
                { "label": "Matt", "image_id": "Matt", "scroll_offset": 480 }
            ]
        })
        .to_string(),
    )?;

    let manifest = MenuManifest::load(&manifest_path)?;
    let mut menu = PanelSet::new(manifest.build_panels(), manifest.config.clone())?;
    menu.activate(1);
    let geometry = menu.arrange(Viewport::new(1000.0, 16.0)).to_vec();

    assert_eq!(geometry[2].right_offset, 0.0);
    assert_eq!(geometry[1].right_offset, 64.0);
    assert_eq!(geometry[1].width, 700.0);
    assert_eq!(geometry[0].right_offset, 764.0);
    assert_eq!(geometry[0].background, BackgroundPosition::Offset(-420.0));
    assert_eq!(geometry[1].background, BackgroundPosition::Center);
    assert_eq!(geometry.iter().filter(|g| g.active).count(), 1);

    fs::remove_dir_all(&dir)?;
    Ok(())
}

#[test]
fn test_panel_image_lifecycle_is_independent_of_layout() -> Result<()> {
    let dir = scratch_dir("lifecycle")?;
    write_png(&dir.join("img/bizleys.png"), 4, 4)?;

    let manifest = MenuManifest::from_json(
        r#"{"config": {"image_base": "img"},
            "panels": [{"label": "The Bizleys", "image_id": "bizleys", "preferred_extension": ".png"},
                       {"label": "Ghost", "image_id": "ghost"}]}"#,
    )?;
    let mut menu = PanelSet::new(manifest.build_panels(), manifest.config.clone())?;
    let loader = FsImageLoader::new(&dir);

    // Layout first, images later
    let before = menu.arrange(Viewport::new(800.0, 16.0)).to_vec();

    for index in 0..menu.len() {
        let panel = menu.panel_mut(index).expect("index in range");
        let mut resolver = panel
            .begin_image_resolution("img")
            .expect("resolution starts once");
        let resolution = resolver.resolve(&loader);
        assert!(panel.apply_outcome(resolution.outcome));
    }

    assert_eq!(
        menu.panel(0).map(|p| p.image_state().clone()),
        Some(ImageState::Loaded("img/bizleys.png".to_string()))
    );
    assert_eq!(menu.panel(1).map(|p| p.image_state().clone()), Some(ImageState::Failed));

    menu.relayout();
    assert_eq!(menu.geometry(), before.as_slice());

    fs::remove_dir_all(&dir)?;
    Ok(())
}
