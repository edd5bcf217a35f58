#[macro_use]
pub mod pub_macros {

    /// Macro to create const for partition types.
    macro_rules! partition_types {
        (
            $(
                $(#[$docs:meta])*
                ($upcase:ident, $guid:expr, $os:expr, $desc:expr)$(,)*
            )+
        ) => {
            const fn str_to_uuid_or_panic(s: &str) -> Uuid {
                match Uuid::try_parse(s) {
                    Ok(u) => u,
                    Err(_) => panic!("string was not an uuid"),
                }
            }
            $(
                $(#[$docs])*
                pub const $upcase: Type = Type {
                    guid: str_to_uuid_or_panic($guid),
                    os: $os,
                    desc: $desc,
                };
            )+

            /// Every well-known partition type, in declaration order.
            pub const ALL: &[Type] = &[$($upcase),+];
        }
    }
}
