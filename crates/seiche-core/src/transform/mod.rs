// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Single-pass sequence transforms.
//!
//! Stateless helpers that map a sequence to an output in one or two linear
//! passes, with no window bookkeeping. They share nothing with the scanning
//! kernels beyond living in the same workspace.

use num_traits::One;

/// Computes, for every position, the product of all *other* elements.
///
/// Runs one forward pass accumulating a running prefix product and one
/// backward pass multiplying in a running suffix product. Avoiding division
/// is what makes zero-valued elements work: with a single zero in the input,
/// every other output position becomes zero and the zero's position receives
/// the product of the rest.
///
/// `O(n)` time, `O(1)` auxiliary space beyond the output.
///
/// # Examples
///
/// ```rust
/// # use seiche_core::transform::product_except_self;
///
/// assert_eq!(product_except_self(&[1, 2, 3, 4]), vec![24, 12, 8, 6]);
/// ```
pub fn product_except_self<T>(values: &[T]) -> Vec<T>
where
    T: Copy + One,
{
    let mut products = vec![T::one(); values.len()];

    let mut prefix = T::one();
    for (position, &value) in values.iter().enumerate() {
        products[position] = prefix;
        prefix = prefix * value;
    }

    let mut suffix = T::one();
    for (position, &value) in values.iter().enumerate().rev() {
        products[position] = products[position] * suffix;
        suffix = suffix * value;
    }

    products
}

/// Classifies `1..=n` by divisibility, producing the classic labels.
///
/// Multiples of 15 map to `"FizzBuzz"`, multiples of 3 to `"Fizz"`,
/// multiples of 5 to `"Buzz"`, and everything else to its decimal rendering.
///
/// # Examples
///
/// ```rust
/// # use seiche_core::transform::fizzbuzz;
///
/// let labels = fizzbuzz(5);
/// assert_eq!(labels, vec!["1", "2", "Fizz", "4", "Buzz"]);
/// ```
pub fn fizzbuzz(n: usize) -> Vec<String> {
    (1..=n)
        .map(|value| {
            if value % 15 == 0 {
                "FizzBuzz".to_string()
            } else if value % 3 == 0 {
                "Fizz".to_string()
            } else if value % 5 == 0 {
                "Buzz".to_string()
            } else {
                value.to_string()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_except_self_basic() {
        assert_eq!(product_except_self(&[1, 2, 3, 4]), vec![24, 12, 8, 6]);
    }

    #[test]
    fn test_product_except_self_single_zero() {
        // The zero's position receives the product of the rest;
        // every other position becomes zero.
        assert_eq!(product_except_self(&[2, 0, 4, 5]), vec![0, 40, 0, 0]);
    }

    #[test]
    fn test_product_except_self_two_zeros() {
        assert_eq!(product_except_self(&[0, 3, 0]), vec![0, 0, 0]);
    }

    #[test]
    fn test_product_except_self_negative_values() {
        assert_eq!(product_except_self(&[-1, 2, -3]), vec![-6, 3, -2]);
    }

    #[test]
    fn test_product_except_self_degenerate() {
        assert_eq!(product_except_self::<i64>(&[]), Vec::<i64>::new());
        assert_eq!(product_except_self(&[7]), vec![1]);
    }

    #[test]
    fn test_fizzbuzz_labels() {
        let labels = fizzbuzz(15);
        assert_eq!(labels.len(), 15);
        assert_eq!(labels[0], "1");
        assert_eq!(labels[2], "Fizz");
        assert_eq!(labels[4], "Buzz");
        assert_eq!(labels[14], "FizzBuzz");
    }

    #[test]
    fn test_fizzbuzz_empty() {
        assert!(fizzbuzz(0).is_empty());
    }
}
