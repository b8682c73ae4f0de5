macro_rules! shape_parameter {
    ($interpolator:ident, $name:literal) => {
        impl $interpolator {
            /// Display name of this interpolator.
            pub const NAME: &'static str = $name;

            /// Creates the interpolator with shape parameter `p`.
            pub const fn new(p: f64) -> Self {
                Self { p }
            }
        }

        impl Parameterized for $interpolator {
            #[inline]
            fn p(&self) -> f64 {
                self.p
            }

            #[inline]
            fn set_p(&mut self, p: f64) {
                self.p = p;
            }
        }
    };
}

macro_rules! interpolation_enum {
    ($($variant:ident),+ $(,)?) => {
        /// Any interpolator from the catalog, stored by value.
        ///
        /// This is what an [`Anchor`](crate::Anchor) holds by default. All
        /// capability queries are forwarded to the wrapped interpolator.
        #[derive(Clone, Copy, Debug, PartialEq)]
        pub enum Interpolation {
            $(
                $variant($variant),
            )+
        }

        impl Interpolation {
            /// Display names of all catalog entries, in catalog order.
            pub const ALL_NAMES: &'static [&'static str] = &[$($variant::NAME),+];

            /// Looks up a catalog entry by its display name and sets its
            /// shape parameter.
            pub fn with_p(name: &str, p: f64) -> CurveResult<Self> {
                $(
                    if name == $variant::NAME {
                        return Ok(Self::$variant($variant::new(p)));
                    }
                )+
                Err(CurveError::UnknownInterpolator(name.to_owned()))
            }
        }

        $(
            impl From<$variant> for Interpolation {
                fn from(interpolator: $variant) -> Self {
                    Self::$variant(interpolator)
                }
            }
        )+

        impl Interpolator for Interpolation {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant(i) => i.name(),)+
                }
            }

            #[inline]
            fn interpolate(&self, t: f64) -> f64 {
                match self {
                    $(Self::$variant(i) => i.interpolate(t),)+
                }
            }

            fn as_derivable(&self) -> Option<&dyn Derivable> {
                match self {
                    $(Self::$variant(i) => i.as_derivable(),)+
                }
            }

            fn as_integrable(&self) -> Option<&dyn Integrable> {
                match self {
                    $(Self::$variant(i) => i.as_integrable(),)+
                }
            }

            fn as_invertible(&self) -> Option<&dyn Invertible> {
                match self {
                    $(Self::$variant(i) => i.as_invertible(),)+
                }
            }

            fn extrema_positions(&self) -> Option<&[f64]> {
                match self {
                    $(Self::$variant(i) => i.extrema_positions(),)+
                }
            }

            fn derivative_extrema_positions(&self) -> Option<&[f64]> {
                match self {
                    $(Self::$variant(i) => i.derivative_extrema_positions(),)+
                }
            }

            fn integral_extrema_positions(&self) -> Option<&[f64]> {
                match self {
                    $(Self::$variant(i) => i.integral_extrema_positions(),)+
                }
            }
        }

        impl Parameterized for Interpolation {
            fn p(&self) -> f64 {
                match self {
                    $(Self::$variant(i) => i.p(),)+
                }
            }

            fn set_p(&mut self, p: f64) {
                match self {
                    $(Self::$variant(i) => i.set_p(p),)+
                }
            }
        }
    };
}
