//! Macro for declaring typed identifier kinds.

/// Declares a new identifier kind: a zero-sized marker type, its
/// [`Kind`](crate::Kind) impl, and an `Id<_>` alias.
///
/// All behavior (construction, parsing, ordering, serialization) is
/// shared on the generic [`Id`](crate::Id); adding a kind adds no new
/// logic.
///
/// # Example
///
/// ```ignore
/// define_id!(WarehouseId, WarehouseKind, "Warehouse", "warehouse_id");
///
/// let id = WarehouseId::new();
/// let parsed: WarehouseId = id.to_string().parse()?;
/// ```
#[macro_export]
macro_rules! define_id {
    ($(#[$meta:meta])* $alias:ident, $marker:ident, $name:literal, $param:literal) => {
        /// Kind marker; never instantiated.
        #[derive(Debug)]
        pub enum $marker {}

        impl $crate::Kind for $marker {
            const NAME: &'static str = $name;
            const PARAM: &'static str = $param;
        }

        $(#[$meta])*
        pub type $alias = $crate::Id<$marker>;
    };
}
