//! Product catalog with code uniqueness and revision tracking.

use std::collections::{BTreeMap, HashMap};

use crate::catalog::revision::{Revision, RevisionLog};
use crate::catalog::{Product, ProductExtra};
use crate::error::CommerceError;

/// All products on sale, keyed by product code.
#[derive(Debug, Default)]
pub struct Catalog {
    products: BTreeMap<String, Box<dyn Product>>,
    /// Every owned code (including variant codes) to its product's code.
    owners: HashMap<String, String>,
    revisions: RevisionLog,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product. Every code it owns must be unused.
    pub fn insert<P: Product + 'static>(&mut self, product: P) -> Result<(), CommerceError> {
        self.insert_boxed(Box::new(product))
    }

    /// Add an already boxed product.
    pub fn insert_boxed(&mut self, product: Box<dyn Product>) -> Result<(), CommerceError> {
        self.check_codes(&*product, None)?;
        self.revisions.record(&*product, "Initial version.")?;
        tracing::debug!(
            product_code = product.product_code(),
            kind = product.kind(),
            "added product to catalog"
        );
        self.index(product);
        Ok(())
    }

    /// Replace the product with the same code, returning the old one.
    pub fn replace<P: Product + 'static>(
        &mut self,
        product: P,
        comment: impl Into<String>,
    ) -> Result<Box<dyn Product>, CommerceError> {
        let code = product.product_code().to_string();
        if !self.products.contains_key(&code) {
            return Err(CommerceError::ProductNotFound(code));
        }
        self.check_codes(&product, Some(code.as_str()))?;
        self.revisions.record(&product, comment)?;

        let old = self.unindex(&code)?;
        self.index(Box::new(product));
        tracing::debug!(product_code = %code, "replaced product in catalog");
        Ok(old)
    }

    /// Remove a product. Its revisions are kept.
    pub fn remove(&mut self, product_code: &str) -> Result<Box<dyn Product>, CommerceError> {
        self.unindex(product_code)
    }

    /// Product registered under exactly this code.
    pub fn get(&self, product_code: &str) -> Option<&dyn Product> {
        self.products.get(product_code).map(|p| &**p)
    }

    /// Product owning a code, which may be one of its variant codes.
    pub fn find_owner(&self, code: &str) -> Option<&dyn Product> {
        self.owners.get(code).and_then(|owner| self.get(owner))
    }

    /// Resolve a code to the sellable unit.
    ///
    /// A product code goes through the product's markedness with `extra`;
    /// a variant code selects that variant.
    pub fn sellable(&self, code: &str, extra: &ProductExtra) -> Result<&dyn Product, CommerceError> {
        let owner = self
            .find_owner(code)
            .ok_or_else(|| CommerceError::ProductNotFound(code.to_string()))?;
        if owner.product_code() == code {
            owner.get_product_markedness(extra)
        } else {
            owner.get_product_markedness(&ProductExtra::with_product_code(code))
        }
    }

    /// Revisions of a product, oldest first.
    pub fn revisions<'a>(&'a self, product_code: &'a str) -> impl Iterator<Item = &'a Revision> + 'a {
        self.revisions.history(product_code)
    }

    pub fn revision_log(&self) -> &RevisionLog {
        &self.revisions
    }

    /// Iterate over products in code order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Product> {
        self.products.values().map(|p| &**p)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn check_codes(&self, product: &dyn Product, replacing: Option<&str>) -> Result<(), CommerceError> {
        let mut seen = Vec::new();
        for code in product.product_codes() {
            let taken = match self.owners.get(code) {
                Some(owner) => Some(owner.as_str()) != replacing,
                None => false,
            };
            if taken || seen.contains(&code) {
                return Err(CommerceError::DuplicateProductCode(code.to_string()));
            }
            seen.push(code);
        }
        Ok(())
    }

    fn index(&mut self, product: Box<dyn Product>) {
        let code = product.product_code().to_string();
        for owned in product.product_codes() {
            self.owners.insert(owned.to_string(), code.clone());
        }
        self.products.insert(code, product);
    }

    fn unindex(&mut self, product_code: &str) -> Result<Box<dyn Product>, CommerceError> {
        let product = self
            .products
            .remove(product_code)
            .ok_or_else(|| CommerceError::ProductNotFound(product_code.to_string()))?;
        self.owners.retain(|_, owner| owner.as_str() != product_code);
        Ok(product)
    }
}
