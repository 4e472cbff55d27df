/// Declares a validated `String` newtype with the derives shared by all form
/// fields.
macro_rules! nutype_string {
    ($ident:ident($($args:tt)*)) => {
        #[::nutype::nutype(
            $($args)*,
            derive(
                Debug,
                Clone,
                PartialEq,
                Eq,
                Hash,
                Deref,
                AsRef,
                TryFrom,
                Into,
            )
        )]
        pub struct $ident(String);
    };
}

pub(crate) use nutype_string;
