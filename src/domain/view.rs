/// The four top-level screens. Exactly one is active at a time; there is no
/// nested routing, history stack, or URL binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    ProductList,
    Tracking,
    Admin,
}
