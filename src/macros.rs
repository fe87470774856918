// Copyright 2025 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

/// Implements [`Queue`](crate::queue::Queue) methods by forwarding to inherent methods of the
/// same name and signature.
macro_rules! delegate {
	() => { };
	(fn $name:ident(&self $(, $arg:ident: $ty:ty)*) $(-> $ret:ty)?; $($next:tt)*) => {
		#[inline]
		fn $name(&self $(, $arg: $ty)*) $(-> $ret)? {
			Self::$name(self $(, $arg)*)
		}
		$crate::macros::delegate! { $($next)* }
	};
	(fn $name:ident(&mut self $(, $arg:ident: $ty:ty)*) $(-> $ret:ty)?; $($next:tt)*) => {
		#[inline]
		fn $name(&mut self $(, $arg: $ty)*) $(-> $ret)? {
			Self::$name(self $(, $arg)*)
		}
		$crate::macros::delegate! { $($next)* }
	};
}

/// Implements [`PartialEq`] between front-to-back sequences. Each side must have `len` and an
/// `iter` yielding references.
macro_rules! gen_eq {
	() => { };
	($lhs:ty, $rhs:ty;$($next:tt)*) => {
		$crate::macros::gen_eq! { $lhs, $rhs [];$($next)* }
	};
	($lhs:ty, $rhs:ty [$($params:tt)*];$($next:tt)*) => {
		impl<T: PartialEq<U>, U, $($params)*> PartialEq<$rhs> for $lhs {
			fn eq(&self, other: &$rhs) -> bool {
				self.len() == other.len() &&
				self.iter().zip(other.iter()).all(|(a, b)| a == b)
			}
		}
		$crate::macros::gen_eq! { $($next)* }
	};
}

pub(crate) use {delegate, gen_eq};
