//! Macros for struct and enum mapping.

/// Implements `ToJson` and `FromJson` for a struct, plus a `field_names()`
/// associated function listing the mapped members.
///
/// Reading starts from `Default::default()`: members whose key is absent or
/// `null` keep their default value.
///
/// # Examples
///
/// ```
/// use json_doc::{from_str, reflect_json, to_string};
///
/// #[derive(Debug, Clone)]
/// struct Config {
///     host: String,
///     port: u32,
/// }
///
/// impl Default for Config {
///     fn default() -> Self {
///         Self {
///             host: "127.0.0.1".to_string(),
///             port: 8080,
///         }
///     }
/// }
///
/// reflect_json! {
///     Config {
///         host: String,
///         port: u32,
///     }
/// }
///
/// // Missing fields keep their defaults
/// let config: Config = from_str(r#"{"port": 3000}"#).unwrap();
/// assert_eq!(config.host, "127.0.0.1");
/// assert_eq!(config.port, 3000);
/// assert_eq!(Config::field_names(), ["host", "port"]);
/// assert_eq!(to_string(&config), r#"{"host":"127.0.0.1","port":3000}"#);
/// ```
#[macro_export]
macro_rules! reflect_json {
    ($struct_name:ident { $($field:ident: $field_ty:ty),* $(,)? }) => {
        impl $struct_name {
            /// Names of the members mapped to document keys.
            #[allow(dead_code)]
            pub fn field_names() -> &'static [&'static str] {
                &[$(stringify!($field)),*]
            }
        }

        impl $crate::ToJson for $struct_name {
            fn to_json(&self) -> $crate::JsonValue {
                let mut map = $crate::Object::new();
                $(
                    map.insert(
                        stringify!($field).to_string(),
                        $crate::ToJson::to_json(&self.$field)
                    );
                )*
                $crate::JsonValue::Object(map)
            }
        }

        impl $crate::FromJson for $struct_name {
            fn from_json(value: &$crate::JsonValue) -> $crate::Result<Self> {
                let obj = value
                    .as_object()
                    .ok_or_else(|| $crate::JsonError::TypeMismatch(
                        format!("expected object for {}, found {}", stringify!($struct_name), value.json_type())
                    ))?;

                let mut result = Self::default();

                $(
                    match obj.get(stringify!($field)) {
                        Some(field_value) if !field_value.is_null() => {
                            result.$field = <$field_ty as $crate::FromJson>::from_json(field_value)?;
                        }
                        _ => {}
                    }
                )*

                Ok(result)
            }
        }
    };
}

/// Implements `ToJson` and `FromJson` for an enum with unit variants.
///
/// Variants are written as their name strings.
///
/// # Examples
///
/// ```
/// use json_doc::{from_str, reflect_json_enum, to_string};
///
/// #[derive(Debug, PartialEq)]
/// enum Role {
///     Owner,
///     Guest,
/// }
///
/// reflect_json_enum! {
///     Role {
///         Owner,
///         Guest,
///     }
/// }
///
/// assert_eq!(to_string(&Role::Owner), r#""Owner""#);
/// assert_eq!(from_str::<Role>(r#""Guest""#).unwrap(), Role::Guest);
/// assert!(from_str::<Role>(r#""Admin""#).is_err());
/// ```
#[macro_export]
macro_rules! reflect_json_enum {
    ($enum_name:ident { $($variant:ident),* $(,)? }) => {
        impl $crate::ToJson for $enum_name {
            fn to_json(&self) -> $crate::JsonValue {
                match self {
                    $(
                        $enum_name::$variant => {
                            $crate::JsonValue::String(stringify!($variant).to_string())
                        }
                    )*
                }
            }
        }

        impl $crate::FromJson for $enum_name {
            fn from_json(value: &$crate::JsonValue) -> $crate::Result<Self> {
                let s = value
                    .as_str()
                    .ok_or_else(|| $crate::JsonError::TypeMismatch(
                        format!("expected string for enum {}", stringify!($enum_name))
                    ))?;

                match s {
                    $(
                        stringify!($variant) => Ok($enum_name::$variant),
                    )*
                    _ => Err($crate::JsonError::TypeMismatch(
                        format!("unknown variant '{}' for enum {}", s, stringify!($enum_name))
                    )),
                }
            }
        }
    };
}
