// Operator forwarding shared by `Int128` and `Decimal`. Each type implements the
// reference/reference form of an operator and these fill in the owned variants.

macro_rules! forward_val_val_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl $imp<$res> for $res {
            type Output = $res;

            #[inline(always)]
            fn $method(self, other: $res) -> $res {
                (&self).$method(&other)
            }
        }
    };
}

macro_rules! forward_ref_val_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl<'a> $imp<$res> for &'a $res {
            type Output = $res;

            #[inline(always)]
            fn $method(self, other: $res) -> $res {
                self.$method(&other)
            }
        }
    };
}

macro_rules! forward_val_ref_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl<'a> $imp<&'a $res> for $res {
            type Output = $res;

            #[inline(always)]
            fn $method(self, other: &$res) -> $res {
                (&self).$method(other)
            }
        }
    };
}

macro_rules! forward_all_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        forward_val_val_binop!(impl $imp for $res, $method);
        forward_ref_val_binop!(impl $imp for $res, $method);
        forward_val_ref_binop!(impl $imp for $res, $method);
    };
}

macro_rules! forward_assign_op {
    (impl $imp:ident for $res:ty, $method:ident, $op:ident) => {
        impl $imp<$res> for $res {
            #[inline(always)]
            fn $method(&mut self, other: $res) {
                *self = (&*self).$op(&other);
            }
        }

        impl<'a> $imp<&'a $res> for $res {
            #[inline(always)]
            fn $method(&mut self, other: &'a $res) {
                *self = (&*self).$op(other);
            }
        }
    };
}
