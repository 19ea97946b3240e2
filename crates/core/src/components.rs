//! Component template library and the markup composer.
//!
//! The library is a fixed table of named markup/style fragments. Composing a
//! selection concatenates the fragments in the order the caller chose them.

use serde::Serialize;

use crate::error::ComposeError;

/// A named, reusable markup + style fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComponentTemplate {
    pub name: &'static str,
    pub markup: &'static str,
    pub style: &'static str,
}

static BUILTIN_TEMPLATES: [ComponentTemplate; 4] = [
    ComponentTemplate {
        name: "Header",
        markup: "<header><h1>App Header</h1></header>",
        style: "header { background-color: #333; color: white; padding: 10px;}",
    },
    ComponentTemplate {
        name: "Product Card",
        markup: "<div class='product-card'><h3>Product Title</h3><img src='product.jpg' alt='Product'><p>Price: $99.99</p><button>Add to Cart</button></div>",
        style: ".product-card {border: 1px solid #ddd; padding: 10px;}",
    },
    ComponentTemplate {
        name: "Footer",
        markup: "<footer><p>Footer Content</p></footer>",
        style: "footer { background-color: #222; color: white; padding: 20px; text-align: center;}",
    },
    ComponentTemplate {
        name: "Landing Page",
        markup: "<div class='landing-page'><h1>Welcome to Our Website</h1><p>Explore our services and products</p></div>",
        style: ".landing-page {text-align: center; padding: 50px; background-color: #f4f4f4;}",
    },
];

/// Markup and style produced by [`ComponentLibrary::compose`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Composition {
    pub markup: String,
    pub style: String,
}

/// Read-only lookup table of component templates.
///
/// Names are unique; iteration follows table order, which is also the order
/// components are offered to the user.
#[derive(Debug, Clone, Copy)]
pub struct ComponentLibrary {
    templates: &'static [ComponentTemplate],
}

impl ComponentLibrary {
    /// Wrap a static template table. Names must be unique.
    pub const fn new(templates: &'static [ComponentTemplate]) -> Self {
        Self { templates }
    }

    /// The built-in library: Header, Product Card, Footer, Landing Page.
    pub fn builtin() -> Self {
        Self::new(&BUILTIN_TEMPLATES)
    }

    pub fn templates(&self) -> &'static [ComponentTemplate] {
        self.templates
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.templates.iter().map(|t| t.name)
    }

    /// Look up a template by exact name.
    pub fn get(&self, name: &str) -> Option<&'static ComponentTemplate> {
        self.templates.iter().find(|t| t.name == name)
    }

    /// Concatenate the markup and style of `selected`, in the given order.
    ///
    /// Every name is resolved before anything is concatenated, so an unknown
    /// name yields an error and no partial output. Duplicates are kept.
    pub fn compose<S: AsRef<str>>(&self, selected: &[S]) -> Result<Composition, ComposeError> {
        let resolved = selected
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.get(name).ok_or_else(|| ComposeError::UnknownComponent {
                    name: name.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut composition = Composition::default();
        for template in resolved {
            composition.markup.push_str(template.markup);
            composition.style.push_str(template.style);
        }
        Ok(composition)
    }
}

impl Default for ComponentLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}
