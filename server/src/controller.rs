use std::future::IntoFuture;
use std::marker::PhantomData;

// Original: https://github.com/HalsekiRaika/architectured/blob/e5caa5c7ae801d1aaac6e275b3ea0ef26d6ff26b/server/src/controller.rs
pub trait Intake<I>: 'static + Sync + Send {
    type To;
    fn emit(&self, input: I) -> Self::To;
}

/// Intake that may refuse its input, used for request bodies that need validation.
pub trait TryIntake<I>: 'static + Sync + Send {
    type To;
    type Error;
    fn emit(&self, input: I) -> Result<Self::To, Self::Error>;
}

pub trait Exhaust<I>: 'static + Sync + Send {
    type To;
    fn emit(&self, input: I) -> Self::To;
}

pub struct Controller<T, P, I, D, O> {
    transformer: T,
    presenter: P,
    _i: PhantomData<I>,
    _t: PhantomData<D>,
    _o: PhantomData<O>,
}

impl<T, P, I, D, O> Controller<T, P, I, D, O> {
    pub fn new(transformer: T, presenter: P) -> Self {
        Self {
            transformer,
            presenter,
            _i: PhantomData,
            _t: PhantomData,
            _o: PhantomData,
        }
    }

    fn preset(self) -> P {
        self.presenter
    }
}

impl<T, P, I, D, O> Controller<T, P, I, D, O>
where
    T: Intake<I, To = D>,
{
    pub fn intake(self, input: I) -> Transformed<T, P, I, D, O> {
        Transformed {
            transformed: self.transformer.emit(input),
            controller: self,
        }
    }
}

impl<T, P, I, D, O> Controller<T, P, I, D, O>
where
    T: TryIntake<I, To = D>,
{
    pub fn try_intake(self, input: I) -> Result<Transformed<T, P, I, D, O>, T::Error> {
        Ok(Transformed {
            transformed: self.transformer.emit(input)?,
            controller: self,
        })
    }
}

impl<P, O> Controller<(), P, (), (), O>
where
    P: Exhaust<O>,
{
    pub async fn bypass<F, Fut, E>(self, f: F) -> Result<P::To, E>
    where
        F: FnOnce() -> Fut,
        Fut: IntoFuture<Output = Result<O, E>>,
    {
        Ok(self.preset().emit(f().await?))
    }
}

pub struct Transformed<T, P, I, D, O> {
    transformed: D,
    controller: Controller<T, P, I, D, O>,
}

impl<T, P, I, D, O> Transformed<T, P, I, D, O>
where
    P: Exhaust<O>,
{
    pub async fn handle<F, Fut, E>(self, f: F) -> Result<P::To, E>
    where
        F: FnOnce(D) -> Fut,
        Fut: IntoFuture<Output = Result<O, E>>,
    {
        Ok(self.controller.preset().emit(f(self.transformed).await?))
    }
}

#[cfg(test)]
mod test {
    use super::{Controller, Exhaust, Intake, TryIntake};

    struct Doubler;

    impl Intake<i32> for Doubler {
        type To = i32;
        fn emit(&self, input: i32) -> Self::To {
            input * 2
        }
    }

    struct Positive;

    impl TryIntake<i32> for Positive {
        type To = i32;
        type Error = String;
        fn emit(&self, input: i32) -> Result<Self::To, Self::Error> {
            if input > 0 {
                Ok(input)
            } else {
                Err(format!("{input} is not positive"))
            }
        }
    }

    struct Stringify;

    impl Exhaust<i32> for Stringify {
        type To = String;
        fn emit(&self, input: i32) -> Self::To {
            input.to_string()
        }
    }

    #[tokio::test]
    async fn input_flows_through_service_and_presenter() {
        let out: Result<String, ()> = Controller::new(Doubler, Stringify)
            .intake(21)
            .handle(|dto| async move { Ok(dto) })
            .await;
        assert_eq!(out, Ok("42".to_string()));
    }

    #[tokio::test]
    async fn refused_input_never_reaches_service() {
        let refused = Controller::<_, _, _, _, i32>::new(Positive, Stringify).try_intake(-1);
        assert_eq!(refused.err(), Some("-1 is not positive".to_string()));

        let Ok(transformed) = Controller::new(Positive, Stringify).try_intake(5) else {
            panic!("5 is positive");
        };
        let accepted: Result<String, ()> = transformed.handle(|dto| async move { Ok(dto + 1) }).await;
        assert_eq!(accepted, Ok("6".to_string()));
    }
}
