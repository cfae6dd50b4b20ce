//! Product aggregate root.

use std::collections::BTreeMap;

use catalog_core::{AggregateRoot, DomainError, DomainResult, Entity, find_duplicate_id};

use crate::gallery::{Gallery, ImageUrl};
use crate::ids::{BusinessId, ProductId, VariantId};
use crate::text::Description;
use crate::variant::Variant;

/// Aggregate root: Product.
///
/// Owns its variants exclusively. The variant collection is keyed by id, so no
/// two variants can share an identifier; [`Product::add_variant`] is the only
/// way to grow it and refuses duplicates. Every operation returns a new,
/// fully-validated product and leaves `self` untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    business_id: BusinessId,
    category: String,
    description: Description,
    gallery: Gallery,
    variants: BTreeMap<VariantId, Variant>,
}

impl Product {
    /// Mint a new product with a generated id.
    pub fn create(
        business_id: BusinessId,
        category: impl Into<String>,
        description: Description,
        gallery: Gallery,
        initial_variants: impl IntoIterator<Item = Variant>,
    ) -> DomainResult<Self> {
        Self::rehydrate(
            ProductId::generate(),
            business_id,
            category,
            description,
            gallery,
            initial_variants,
        )
    }

    /// Same as [`Product::create`] with no initial variants.
    pub fn create_empty(
        business_id: BusinessId,
        category: impl Into<String>,
        description: Description,
        gallery: Gallery,
    ) -> DomainResult<Self> {
        Self::create(business_id, category, description, gallery, Vec::<Variant>::new())
    }

    /// Validating constructor for an existing identity (e.g. loaded from storage).
    ///
    /// Fails with `Missing` on a blank category and with `Duplicate` when two
    /// different variants share an id. Identical copies collapse into one.
    pub fn rehydrate(
        id: ProductId,
        business_id: BusinessId,
        category: impl Into<String>,
        description: Description,
        gallery: Gallery,
        variants: impl IntoIterator<Item = Variant>,
    ) -> DomainResult<Self> {
        let category = category.into();
        if category.trim().is_empty() {
            return Err(DomainError::missing("category must not be empty"));
        }

        let mut unique: Vec<Variant> = Vec::new();
        for variant in variants {
            if !unique.contains(&variant) {
                unique.push(variant);
            }
        }
        let variants = unique;
        if let Some(dup) = find_duplicate_id(&variants) {
            return Err(duplicate_variant(dup));
        }

        Ok(Self {
            id,
            business_id,
            category,
            description,
            gallery,
            variants: variants
                .into_iter()
                .map(|v| (v.id().clone(), v))
                .collect(),
        })
    }

    pub fn business_id(&self) -> &BusinessId {
        &self.business_id
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    /// Variants ordered by id.
    pub fn variants(&self) -> impl ExactSizeIterator<Item = &Variant> {
        self.variants.values()
    }

    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }

    pub fn change_description(&self, new_description: Description) -> Self {
        Self {
            description: new_description,
            ..self.clone()
        }
    }

    /// Merge an image into the gallery; an already present URL is a no-op.
    pub fn add_image(&self, new_image: ImageUrl) -> Self {
        Self {
            gallery: self.gallery.with_image(new_image),
            ..self.clone()
        }
    }

    pub fn add_variant(&self, new_variant: Variant) -> DomainResult<Self> {
        if self.variants.contains_key(new_variant.id()) {
            return Err(duplicate_variant(new_variant.id()));
        }

        let mut variants = self.variants.clone();
        variants.insert(new_variant.id().clone(), new_variant);
        Ok(Self {
            variants,
            ..self.clone()
        })
    }

    pub fn find_variant_by_id(&self, variant_id: &VariantId) -> Option<&Variant> {
        self.variants.get(variant_id)
    }
}

impl AggregateRoot for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn duplicate_variant(id: &VariantId) -> DomainError {
    DomainError::duplicate(format!("Variant with this ID already exists: {id}"))
}
