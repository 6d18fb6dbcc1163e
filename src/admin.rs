use std::path::Path;
use std::sync::Arc;

use tracing::{info, instrument};

use crate::assist::DescriptionGenerator;
use crate::clients::CatalogClient;
use crate::domain::{Product, ProductDraft};
use crate::error::AdminError;

/// Categories offered by the admin form; the first entry is the default.
pub const CATEGORIES: [&str; 4] = ["Album", "Merch", "Photocard", "Magazine"];

/// Used when the admin submits without writing a description.
const DEFAULT_DESCRIPTION: &str = "New arrival K-pop merchandise.";

/// Session-local display handle for a locally selected image file. Nothing is
/// uploaded or stored; the handle only identifies the selection for the
/// lifetime of the session.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageHandle(String);

impl ImageHandle {
    pub fn from_file(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        let stamp = chrono::Utc::now().timestamp_millis();
        Self(format!("mem://{stamp}/{name}"))
    }

    pub fn as_uri(&self) -> &str {
        &self.0
    }
}

/// The admin intake form: a local draft that, on submit, becomes a catalog
/// product. The draft is owned by the application root, so navigating away
/// and back leaves it intact.
pub struct AdminForm {
    catalog: CatalogClient,
    assist: Arc<dyn DescriptionGenerator>,
    name: String,
    price: String,
    category: String,
    description: String,
    image: Option<ImageHandle>,
    generating: bool,
}

impl AdminForm {
    pub fn new(catalog: CatalogClient, assist: Arc<dyn DescriptionGenerator>) -> Self {
        Self {
            catalog,
            assist,
            name: String::new(),
            price: String::new(),
            category: CATEGORIES[0].to_string(),
            description: String::new(),
            image: None,
            generating: false,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Price is held as the raw numeric string the admin typed; it is parsed
    /// at submission.
    pub fn set_price(&mut self, price: impl Into<String>) {
        self.price = price.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Converts a local file selection into the session-local handle the
    /// product will display.
    pub fn attach_image(&mut self, path: &Path) {
        self.image = Some(ImageHandle::from_file(path));
    }

    #[allow(dead_code)]
    pub fn image(&self) -> Option<&ImageHandle> {
        self.image.as_ref()
    }

    #[allow(dead_code)]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[allow(dead_code)]
    pub fn is_generating(&self) -> bool {
        self.generating
    }

    /// Asks the external generator for a blurb and overwrites the draft
    /// description with whatever text comes back, placeholder included. A
    /// blank product name disables the feature, as in the form's UI.
    #[instrument(skip(self))]
    pub async fn generate_description(&mut self) {
        if self.name.trim().is_empty() {
            return;
        }
        self.generating = true;
        let blurb = self.assist.generate(&self.name, &self.category).await;
        self.description = blurb.text().to_string();
        self.generating = false;
    }

    /// Validates the draft, lists the product, and resets the draft fields.
    /// Category survives the reset, matching the form's behavior.
    #[instrument(skip(self))]
    pub async fn submit(&mut self) -> Result<Product, AdminError> {
        if self.name.trim().is_empty() {
            return Err(AdminError::MissingField("name"));
        }
        if self.price.trim().is_empty() {
            return Err(AdminError::MissingField("price"));
        }
        let price: u32 = self
            .price
            .trim()
            .parse()
            .map_err(|_| AdminError::InvalidPrice(self.price.clone()))?;
        let image = self.image.as_ref().ok_or(AdminError::MissingImage)?;

        let description = if self.description.trim().is_empty() {
            DEFAULT_DESCRIPTION.to_string()
        } else {
            self.description.clone()
        };
        let draft = ProductDraft {
            name: self.name.clone(),
            price,
            image: image.as_uri().to_string(),
            category: self.category.clone(),
            description,
        };

        let product = self.catalog.add_product(draft).await?;
        info!(product_id = %product.id, "Product listed");

        self.name.clear();
        self.price.clear();
        self.description.clear();
        self.image = None;
        Ok(product)
    }
}
