use std::ops::ControlFlow;

/// Repeatedly applies `f` to an accumulator until it breaks.
pub fn loop_try_fold<F, B, C>(init: C, mut f: F) -> B
where
    F: FnMut(C) -> ControlFlow<B, C>,
{
    let mut accum = init;

    loop {
        match f(accum) {
            ControlFlow::Continue(c) => accum = c,
            ControlFlow::Break(b) => break b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loop_try_fold_stops_on_break() {
        let steps = loop_try_fold(0u32, |n| {
            if n == 5 {
                ControlFlow::Break(n * 10)
            } else {
                ControlFlow::Continue(n + 1)
            }
        });

        assert_eq!(steps, 50);
    }
}
