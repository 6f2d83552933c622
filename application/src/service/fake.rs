use std::sync::{Arc, Mutex, MutexGuard};

use error_stack::Report;
use time::macros::datetime;
use time::OffsetDateTime;

use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    CategoryQuery, CustomerQuery, DependOnCategoryQuery, DependOnCustomerQuery,
    DependOnGameQuery, DependOnRentalQuery, GameQuery, RentalQuery,
};
use kernel::interface::update::{
    CategoryModifier, CustomerModifier, DependOnCategoryModifier, DependOnCustomerModifier,
    DependOnGameModifier, DependOnRentalModifier, GameModifier, RentalModifier,
};
use kernel::prelude::entity::{
    Category, CategoryId, CategoryName, Customer, CustomerDraft, CustomerId, DelayFee, Game,
    GameDraft, GameId, PricePerDay, Rental, RentalDetail, RentalDraft, RentalId, RentalStatus,
    ReturnDate,
};
use kernel::KernelError;

#[derive(Default)]
struct Tables {
    categories: Vec<Category>,
    games: Vec<Game>,
    customers: Vec<Customer>,
    rentals: Vec<Rental>,
}

pub struct FakeClock(Mutex<OffsetDateTime>);

impl FakeClock {
    pub fn set(&self, now: OffsetDateTime) {
        *self.0.lock().unwrap() = now;
    }
}

impl Clock for FakeClock {
    fn now(&self) -> OffsetDateTime {
        *self.0.lock().unwrap()
    }
}

/// Store kept in memory, writes are visible without commit.
pub struct InMemoryDatabase {
    tables: Arc<Mutex<Tables>>,
    clock: FakeClock,
}

impl Default for InMemoryDatabase {
    fn default() -> Self {
        Self {
            tables: Arc::default(),
            clock: FakeClock(Mutex::new(datetime!(2024-01-10 10:00 UTC))),
        }
    }
}

impl InMemoryDatabase {
    pub fn fake_clock(&self) -> &FakeClock {
        &self.clock
    }

    pub fn rental(&self, id: i32) -> Option<Rental> {
        let tables = self.tables.lock().unwrap();
        tables
            .rentals
            .iter()
            .find(|rental| rental.id() == &RentalId::new(id))
            .cloned()
    }

    pub fn rental_count(&self) -> usize {
        self.tables.lock().unwrap().rentals.len()
    }
}

pub struct InMemoryConnection(Arc<Mutex<Tables>>);

impl InMemoryConnection {
    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.0.lock().unwrap()
    }
}

#[async_trait::async_trait]
impl Transaction for InMemoryConnection {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }
}

#[async_trait::async_trait]
impl DatabaseConnection<InMemoryConnection> for InMemoryDatabase {
    async fn transact(&self) -> error_stack::Result<InMemoryConnection, KernelError> {
        Ok(InMemoryConnection(Arc::clone(&self.tables)))
    }
}

impl DependOnClock for InMemoryDatabase {
    type Clock = FakeClock;
    fn clock(&self) -> &Self::Clock {
        &self.clock
    }
}

pub struct InMemoryRepository;

fn next_id(len: usize) -> i32 {
    i32::try_from(len).unwrap() + 1
}

#[async_trait::async_trait]
impl CategoryQuery<InMemoryConnection> for InMemoryRepository {
    async fn find_all(
        &self,
        con: &mut InMemoryConnection,
    ) -> error_stack::Result<Vec<Category>, KernelError> {
        Ok(con.tables().categories.clone())
    }

    async fn find_by_id(
        &self,
        con: &mut InMemoryConnection,
        id: &CategoryId,
    ) -> error_stack::Result<Option<Category>, KernelError> {
        let tables = con.tables();
        Ok(tables.categories.iter().find(|c| c.id() == id).cloned())
    }
}

#[async_trait::async_trait]
impl CategoryModifier<InMemoryConnection> for InMemoryRepository {
    async fn create(
        &self,
        con: &mut InMemoryConnection,
        name: &CategoryName,
    ) -> error_stack::Result<CategoryId, KernelError> {
        let mut tables = con.tables();
        if tables.categories.iter().any(|c| c.name() == name) {
            return Err(Report::new(KernelError::Conflict));
        }
        let id = CategoryId::new(next_id(tables.categories.len()));
        tables.categories.push(Category::new(id, name.clone()));
        Ok(id)
    }
}

#[async_trait::async_trait]
impl GameQuery<InMemoryConnection> for InMemoryRepository {
    async fn find_all(
        &self,
        con: &mut InMemoryConnection,
        name_prefix: Option<&str>,
    ) -> error_stack::Result<Vec<Game>, KernelError> {
        let prefix = name_prefix.map(str::to_lowercase).unwrap_or_default();
        let tables = con.tables();
        Ok(tables
            .games
            .iter()
            .filter(|g| g.name().as_ref().to_lowercase().starts_with(&prefix))
            .cloned()
            .collect())
    }

    async fn find_by_id(
        &self,
        con: &mut InMemoryConnection,
        id: &GameId,
    ) -> error_stack::Result<Option<Game>, KernelError> {
        let tables = con.tables();
        Ok(tables.games.iter().find(|g| g.id() == id).cloned())
    }
}

#[async_trait::async_trait]
impl GameModifier<InMemoryConnection> for InMemoryRepository {
    async fn create(
        &self,
        con: &mut InMemoryConnection,
        game: &GameDraft,
    ) -> error_stack::Result<GameId, KernelError> {
        let mut tables = con.tables();
        if !tables.categories.iter().any(|c| c.id() == game.category_id()) {
            return Err(Report::new(KernelError::ReferenceNotFound));
        }
        if tables.games.iter().any(|g| g.name() == game.name()) {
            return Err(Report::new(KernelError::Conflict));
        }
        let id = GameId::new(next_id(tables.games.len()));
        tables.games.push(game.clone().into_game(id));
        Ok(id)
    }
}

#[async_trait::async_trait]
impl CustomerQuery<InMemoryConnection> for InMemoryRepository {
    async fn find_all(
        &self,
        con: &mut InMemoryConnection,
        cpf_prefix: Option<&str>,
    ) -> error_stack::Result<Vec<Customer>, KernelError> {
        let prefix = cpf_prefix.unwrap_or_default();
        let tables = con.tables();
        Ok(tables
            .customers
            .iter()
            .filter(|c| c.cpf().as_ref().starts_with(prefix))
            .cloned()
            .collect())
    }

    async fn find_by_id(
        &self,
        con: &mut InMemoryConnection,
        id: &CustomerId,
    ) -> error_stack::Result<Option<Customer>, KernelError> {
        let tables = con.tables();
        Ok(tables.customers.iter().find(|c| c.id() == id).cloned())
    }
}

#[async_trait::async_trait]
impl CustomerModifier<InMemoryConnection> for InMemoryRepository {
    async fn create(
        &self,
        con: &mut InMemoryConnection,
        customer: &CustomerDraft,
    ) -> error_stack::Result<CustomerId, KernelError> {
        let mut tables = con.tables();
        if tables.customers.iter().any(|c| c.cpf() == customer.cpf()) {
            return Err(Report::new(KernelError::Conflict));
        }
        let id = CustomerId::new(next_id(tables.customers.len()));
        tables.customers.push(customer.clone().into_customer(id));
        Ok(id)
    }

    async fn update(
        &self,
        con: &mut InMemoryConnection,
        id: &CustomerId,
        customer: &CustomerDraft,
    ) -> error_stack::Result<bool, KernelError> {
        let mut tables = con.tables();
        if tables
            .customers
            .iter()
            .any(|c| c.cpf() == customer.cpf() && c.id() != id)
        {
            return Err(Report::new(KernelError::Conflict));
        }
        match tables.customers.iter_mut().find(|c| c.id() == id) {
            None => Ok(false),
            Some(stored) => {
                *stored = customer.clone().into_customer(*id);
                Ok(true)
            }
        }
    }
}

#[async_trait::async_trait]
impl RentalQuery<InMemoryConnection> for InMemoryRepository {
    async fn find_all(
        &self,
        con: &mut InMemoryConnection,
    ) -> error_stack::Result<Vec<RentalDetail>, KernelError> {
        let tables = con.tables();
        let details = tables
            .rentals
            .iter()
            .map(|rental| {
                let customer = tables
                    .customers
                    .iter()
                    .find(|c| c.id() == rental.customer_id())
                    .ok_or_else(|| Report::new(KernelError::Internal))?;
                let game = tables
                    .games
                    .iter()
                    .find(|g| g.id() == rental.game_id())
                    .ok_or_else(|| Report::new(KernelError::Internal))?;
                let category = tables
                    .categories
                    .iter()
                    .find(|c| c.id() == game.category_id())
                    .ok_or_else(|| Report::new(KernelError::Internal))?;
                Ok(RentalDetail::new(
                    rental.clone(),
                    customer.name().clone(),
                    game.name().clone(),
                    *category.id(),
                    category.name().clone(),
                ))
            })
            .collect::<error_stack::Result<Vec<_>, KernelError>>()?;
        Ok(details)
    }

    async fn find_by_customer_id(
        &self,
        con: &mut InMemoryConnection,
        customer_id: &CustomerId,
    ) -> error_stack::Result<Vec<Rental>, KernelError> {
        let tables = con.tables();
        Ok(tables
            .rentals
            .iter()
            .filter(|r| r.customer_id() == customer_id)
            .cloned()
            .collect())
    }

    async fn find_by_game_id(
        &self,
        con: &mut InMemoryConnection,
        game_id: &GameId,
    ) -> error_stack::Result<Vec<Rental>, KernelError> {
        let tables = con.tables();
        Ok(tables
            .rentals
            .iter()
            .filter(|r| r.game_id() == game_id)
            .cloned()
            .collect())
    }

    async fn find_with_price(
        &self,
        con: &mut InMemoryConnection,
        id: &RentalId,
    ) -> error_stack::Result<Option<(Rental, PricePerDay)>, KernelError> {
        let tables = con.tables();
        let Some(rental) = tables.rentals.iter().find(|r| r.id() == id) else {
            return Ok(None);
        };
        let price = tables
            .games
            .iter()
            .find(|g| g.id() == rental.game_id())
            .map(|g| *g.price_per_day())
            .ok_or_else(|| Report::new(KernelError::Internal))?;
        Ok(Some((rental.clone(), price)))
    }

    async fn count_active_by_game_id(
        &self,
        con: &mut InMemoryConnection,
        game_id: &GameId,
    ) -> error_stack::Result<i64, KernelError> {
        let tables = con.tables();
        let active = tables
            .rentals
            .iter()
            .filter(|r| r.game_id() == game_id && r.status() == RentalStatus::Active)
            .count();
        Ok(i64::try_from(active).unwrap())
    }
}

#[async_trait::async_trait]
impl RentalModifier<InMemoryConnection> for InMemoryRepository {
    async fn create(
        &self,
        con: &mut InMemoryConnection,
        rental: &RentalDraft,
    ) -> error_stack::Result<RentalId, KernelError> {
        let mut tables = con.tables();
        let id = RentalId::new(next_id(tables.rentals.len()));
        tables.rentals.push(rental.clone().into_rental(id));
        Ok(id)
    }

    async fn mark_returned(
        &self,
        con: &mut InMemoryConnection,
        id: &RentalId,
        return_date: &ReturnDate,
        delay_fee: Option<&DelayFee>,
    ) -> error_stack::Result<bool, KernelError> {
        let mut tables = con.tables();
        let Some(stored) = tables
            .rentals
            .iter_mut()
            .find(|r| r.id() == id && r.status() == RentalStatus::Active)
        else {
            return Ok(false);
        };
        *stored = stored
            .clone()
            .into_returned(*return_date, delay_fee.copied());
        Ok(true)
    }
}

macro_rules! depend_on_repository {
    ($($depend:ident :: $assoc:ident => $getter:ident),* $(,)?) => {
        $(
            impl $depend<InMemoryConnection> for InMemoryDatabase {
                type $assoc = InMemoryRepository;
                fn $getter(&self) -> &Self::$assoc {
                    &InMemoryRepository
                }
            }
        )*
    };
}

depend_on_repository!(
    DependOnCategoryQuery::CategoryQuery => category_query,
    DependOnCategoryModifier::CategoryModifier => category_modifier,
    DependOnGameQuery::GameQuery => game_query,
    DependOnGameModifier::GameModifier => game_modifier,
    DependOnCustomerQuery::CustomerQuery => customer_query,
    DependOnCustomerModifier::CustomerModifier => customer_modifier,
    DependOnRentalQuery::RentalQuery => rental_query,
    DependOnRentalModifier::RentalModifier => rental_modifier,
);
