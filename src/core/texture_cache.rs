use std::collections::{HashMap, HashSet};

use egui::{Context, TextureHandle, TextureOptions};

use crate::core::artwork::ImageRef;
use crate::core::image_loader::ImageLoaderFactory;

/// LRU of uploaded artwork textures, keyed by asset name.
pub struct TextureCache {
    textures: HashMap<&'static str, TextureHandle>,
    max_cache_size: usize,
    access_order: Vec<&'static str>,
    failed: HashSet<&'static str>,
}

impl TextureCache {
    pub fn new(max_size: usize) -> Self {
        Self {
            textures: HashMap::new(),
            max_cache_size: max_size.max(1),
            access_order: Vec::new(),
            failed: HashSet::new(),
        }
    }

    pub fn get(&mut self, name: &str) -> Option<&TextureHandle> {
        let texture = self.textures.get(name)?;
        if let Some(pos) = self.access_order.iter().position(|n| *n == name) {
            let name = self.access_order.remove(pos);
            self.access_order.push(name);
        }
        Some(texture)
    }

    pub fn insert(&mut self, name: &'static str, texture: TextureHandle) {
        if self.textures.contains_key(name) {
            self.access_order.retain(|n| *n != name);
        }
        while self.textures.len() >= self.max_cache_size && !self.access_order.is_empty() {
            let oldest = self.access_order.remove(0);
            self.textures.remove(oldest);
        }

        self.textures.insert(name, texture);
        self.access_order.push(name);
    }

    pub fn has_failed(&self, name: &str) -> bool {
        self.failed.contains(name)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Returns the texture for `image_ref`, decoding and uploading it on a miss.
    /// A decode failure is logged once and not retried.
    pub fn get_or_load(
        &mut self,
        ctx: &Context,
        loader: &ImageLoaderFactory,
        image_ref: &ImageRef,
    ) -> Option<TextureHandle> {
        let name = image_ref.name();
        if self.failed.contains(name) {
            return None;
        }
        if let Some(texture) = self.get(name) {
            return Some(texture.clone());
        }

        match loader.load_image(image_ref) {
            Ok(color_image) => {
                log::debug!("uploading texture for {name}");
                let texture = ctx.load_texture(
                    format!("artwork_{name}"),
                    color_image,
                    TextureOptions::LINEAR,
                );
                self.insert(name, texture.clone());
                Some(texture)
            }
            Err(e) => {
                log::error!("could not load artwork image: {e}");
                self.failed.insert(name);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use egui::ColorImage;

    use super::*;
    use crate::core::gallery::GalleryModel;

    fn texture(ctx: &Context, name: &str) -> TextureHandle {
        ctx.load_texture(name, ColorImage::new([1, 1], egui::Color32::WHITE), TextureOptions::default())
    }

    #[test]
    fn evicts_least_recently_used() {
        let ctx = Context::default();
        let mut cache = TextureCache::new(2);
        cache.insert("a", texture(&ctx, "a"));
        cache.insert("b", texture(&ctx, "b"));
        assert!(cache.get("a").is_some());

        cache.insert("c", texture(&ctx, "c"));
        assert!(cache.get("a").is_some());
        assert!(cache.get("b").is_none());
        assert!(cache.get("c").is_some());
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn reinserting_does_not_evict_others() {
        let ctx = Context::default();
        let mut cache = TextureCache::new(2);
        cache.insert("a", texture(&ctx, "a"));
        cache.insert("b", texture(&ctx, "b"));
        cache.insert("b", texture(&ctx, "b2"));
        assert!(cache.get("a").is_some());
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn loads_builtin_artwork_once() {
        let ctx = Context::default();
        let loader = ImageLoaderFactory::default();
        let gallery = GalleryModel::builtin().unwrap();
        let mut cache = TextureCache::new(gallery.len());

        let image_ref = gallery.get(0).image_ref();
        let first = cache.get_or_load(&ctx, &loader, &image_ref).unwrap();
        let second = cache.get_or_load(&ctx, &loader, &image_ref).unwrap();
        assert_eq!(first.id(), second.id());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn remembers_failed_assets() {
        let ctx = Context::default();
        let loader = ImageLoaderFactory::default();
        let mut cache = TextureCache::new(4);
        let broken = ImageRef::embedded("broken.png", b"nope");

        assert!(cache.get_or_load(&ctx, &loader, &broken).is_none());
        assert!(cache.has_failed("broken.png"));
        assert!(cache.get_or_load(&ctx, &loader, &broken).is_none());
        assert_eq!(cache.len(), 0);
    }
}
