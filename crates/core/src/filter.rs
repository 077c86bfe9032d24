//! Search and category filtering for the static list pages.

use std::fmt::Display;

/// A closed set of categories a list can be narrowed to.
pub trait Category: Copy + Eq + Display + 'static {
    /// Every category, in display order.
    const ALL: &'static [Self];

    /// Returns the label shown for this category.
    fn label(self) -> &'static str;

    /// Finds the category with the given label, ignoring ASCII case.
    fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(label))
    }
}

/// Declares a category enum along with its [`Category`] impl.
macro_rules! define_category {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::filter::Category for $name {
            const ALL: &'static [Self] = &[$( Self::$variant ),+];

            fn label(self) -> &'static str {
                match self {
                    $( Self::$variant => $label ),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(
                &self,
                f: &mut ::std::fmt::Formatter<'_>,
            ) -> ::std::fmt::Result {
                f.write_str($crate::filter::Category::label(*self))
            }
        }
    };
}

pub(crate) use define_category;

/// An item of a filterable list.
pub trait Listing {
    /// The category type of the list.
    type Category: Category;

    /// Returns the category of this item.
    fn category(&self) -> Self::Category;

    /// Returns the texts the search box looks into.
    fn search_fields(&self) -> Vec<&str>;
}

/// Returned when a category label matches nothing.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown category {0:?}")]
pub struct UnknownCategory(pub String);

/// Returns whether any of `fields` contains `search`, ignoring case.
///
/// An empty search matches everything.
pub fn matches_search<'a, I>(search: &str, fields: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// The search text and selected category of a list page.
///
/// A `None` category stands for "All".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Filter<C> {
    search: String,
    category: Option<C>,
}

impl<C> Default for Filter<C> {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: None,
        }
    }
}

impl<C: Category> Filter<C> {
    /// Returns the search text.
    #[inline]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Replaces the search text.
    #[inline]
    pub fn set_search<S: Into<String>>(&mut self, search: S) {
        self.search = search.into();
    }

    /// Returns the selected category.
    #[inline]
    pub fn category(&self) -> Option<C> {
        self.category
    }

    /// Selects a category, or all of them.
    #[inline]
    pub fn set_category(&mut self, category: Option<C>) {
        self.category = category;
    }

    /// Selects a category by its label. `"All"` clears the selection.
    pub fn select_category(
        &mut self,
        label: &str,
    ) -> Result<(), UnknownCategory> {
        if label.trim().eq_ignore_ascii_case("all") {
            self.category = None;
            return Ok(());
        }
        let category = C::from_label(label)
            .ok_or_else(|| UnknownCategory(label.to_owned()))?;
        self.category = Some(category);
        Ok(())
    }

    /// Returns whether `item` passes both the category and the search.
    pub fn matches<L: Listing<Category = C>>(&self, item: &L) -> bool {
        if let Some(category) = self.category {
            if item.category() != category {
                return false;
            }
        }
        matches_search(&self.search, item.search_fields())
    }

    /// Returns the items that pass, in their original order.
    pub fn apply<'a, L: Listing<Category = C>>(
        &self,
        items: &'a [L],
    ) -> Vec<&'a L> {
        items.iter().filter(|item| self.matches(*item)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    define_category! {
        Shape {
            Round => "Round",
            Square => "Square & Boxy",
        }
    }

    struct Item {
        name: &'static str,
        shape: Shape,
    }

    impl Listing for Item {
        type Category = Shape;

        fn category(&self) -> Shape {
            self.shape
        }

        fn search_fields(&self) -> Vec<&str> {
            vec![self.name]
        }
    }

    const ITEMS: &[Item] = &[
        Item {
            name: "Ball",
            shape: Shape::Round,
        },
        Item {
            name: "Crate",
            shape: Shape::Square,
        },
        Item {
            name: "Balloon",
            shape: Shape::Round,
        },
    ];

    fn names(items: Vec<&Item>) -> Vec<&'static str> {
        items.into_iter().map(|item| item.name).collect()
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let filter = Filter::<Shape>::default();
        assert_eq!(names(filter.apply(ITEMS)), ["Ball", "Crate", "Balloon"]);
    }

    #[test]
    fn test_search_ignores_case() {
        let mut filter = Filter::<Shape>::default();
        filter.set_search("BALL");
        assert_eq!(names(filter.apply(ITEMS)), ["Ball", "Balloon"]);
        filter.set_search("   ");
        assert_eq!(filter.apply(ITEMS).len(), 3);
    }

    #[test]
    fn test_category_and_search_combine() {
        let mut filter = Filter::default();
        filter.set_category(Some(Shape::Round));
        filter.set_search("loon");
        assert_eq!(names(filter.apply(ITEMS)), ["Balloon"]);

        filter.set_category(Some(Shape::Square));
        assert!(filter.apply(ITEMS).is_empty());
    }

    #[test]
    fn test_select_category_by_label() {
        let mut filter = Filter::<Shape>::default();
        filter.select_category("square & boxy").unwrap();
        assert_eq!(filter.category(), Some(Shape::Square));
        filter.select_category("All").unwrap();
        assert_eq!(filter.category(), None);
        assert_eq!(
            filter.select_category("Triangle"),
            Err(UnknownCategory("Triangle".to_owned()))
        );
        assert_eq!(Shape::Square.to_string(), "Square & Boxy");
    }
}
