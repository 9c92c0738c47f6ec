mod tabular;

use proc_macro::TokenStream;

/// Derives `tabula::table::Tabular` for a struct with named fields.
///
/// Field attributes:
/// - `#[tabula(rename = "Title")]` sets the column title
/// - `#[tabula(ignore)]` or `#[tabula(ignore = true)]` leaves the field out
/// - `#[tabula(display)]` formats the value with `Display` instead of `CellValue`
///
/// `PhantomData` fields are skipped.
#[proc_macro_derive(Tabular, attributes(tabula))]
pub fn derive_tabular(input: TokenStream) -> TokenStream {
    tabular::expand(input.into()).into()
}
