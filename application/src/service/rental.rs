use error_stack::Report;
use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{
    CustomerQuery, DependOnCustomerQuery, DependOnGameQuery, DependOnRentalQuery, GameQuery,
    RentalQuery,
};
use kernel::interface::update::{DependOnRentalModifier, RentalModifier};
use kernel::prelude::entity::{
    CustomerId, DaysRented, GameId, OriginalPrice, RentDate, RentalDraft, RentalId,
    RentalStatus, ReturnDate,
};
use kernel::{KernelError, RentalError};

use crate::transfer::{
    CreateRentalDto, GetRentalsDto, RentalDetailDto, RentalDto, RentalListDto, ReturnRentalDto,
};

#[async_trait::async_trait]
pub trait GetRentalService<Connection: Transaction + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnRentalQuery<Connection>
{
    async fn get_rentals(
        &self,
        dto: GetRentalsDto,
    ) -> error_stack::Result<RentalListDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let listing = match dto {
            GetRentalsDto::All => {
                let rentals = self.rental_query().find_all(&mut connection).await?;
                RentalListDto::Detailed(rentals.into_iter().map(RentalDetailDto::from).collect())
            }
            GetRentalsDto::ByCustomer { customer_id } => {
                let customer_id = CustomerId::new(customer_id);
                let rentals = self
                    .rental_query()
                    .find_by_customer_id(&mut connection, &customer_id)
                    .await?;
                RentalListDto::Plain(rentals.into_iter().map(RentalDto::from).collect())
            }
            GetRentalsDto::ByGame { game_id } => {
                let game_id = GameId::new(game_id);
                let rentals = self
                    .rental_query()
                    .find_by_game_id(&mut connection, &game_id)
                    .await?;
                RentalListDto::Plain(rentals.into_iter().map(RentalDto::from).collect())
            }
        };

        Ok(listing)
    }
}

impl<Connection: Transaction + Send, T> GetRentalService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnRentalQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait CreateRentalService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnClock
    + DependOnGameQuery<Connection>
    + DependOnCustomerQuery<Connection>
    + DependOnRentalQuery<Connection>
    + DependOnRentalModifier<Connection>
{
    /// Opens a rental priced at the game's current daily price.
    ///
    /// The duration is checked before anything is read from the store.
    async fn create_rental(&self, dto: CreateRentalDto) -> error_stack::Result<i32, KernelError> {
        let days_rented = DaysRented::new(dto.days_rented);
        if !days_rented.is_allowed() {
            return Err(RentalError::InvalidDuration
                .into_report()
                .attach_printable(format!("days_rented: {}", dto.days_rented)));
        }

        let mut connection = self.database_connection().transact().await?;

        let game_id = GameId::new(dto.game_id);
        let game = self
            .game_query()
            .find_by_id(&mut connection, &game_id)
            .await?
            .ok_or_else(|| {
                RentalError::GameNotFound
                    .into_report()
                    .attach_printable(format!("game_id: {}", dto.game_id))
            })?;
        let original_price = OriginalPrice::calculate(game.price_per_day(), &days_rented)
            .ok_or_else(|| {
                RentalError::InvalidDuration
                    .into_report()
                    .attach_printable("Rental price overflows")
            })?;

        let customer_id = CustomerId::new(dto.customer_id);
        let customer = self
            .customer_query()
            .find_by_id(&mut connection, &customer_id)
            .await?;
        if customer.is_none() {
            return Err(RentalError::CustomerNotFound
                .into_report()
                .attach_printable(format!("customer_id: {}", dto.customer_id)));
        }

        let active = self
            .rental_query()
            .count_active_by_game_id(&mut connection, &game_id)
            .await?;
        if !game.stock_total().has_copy_left(active) {
            return Err(RentalError::GameUnavailable
                .into_report()
                .attach_printable(format!("{active} of the copies are rented")));
        }

        let rent_date = RentDate::new(self.clock().now().date());
        let rental = RentalDraft::new(
            customer_id,
            game_id,
            rent_date,
            days_rented,
            original_price,
        );
        let id = self
            .rental_modifier()
            .create(&mut connection, &rental)
            .await?;
        connection.commit().await?;

        tracing::info!(
            rental_id = id.as_ref(),
            game_id = dto.game_id,
            customer_id = dto.customer_id,
            "rental created"
        );
        Ok(id.into())
    }
}

impl<Connection: Transaction + Send, T> CreateRentalService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnClock
        + DependOnGameQuery<Connection>
        + DependOnCustomerQuery<Connection>
        + DependOnRentalQuery<Connection>
        + DependOnRentalModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait ReturnRentalService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnClock
    + DependOnRentalQuery<Connection>
    + DependOnRentalModifier<Connection>
{
    /// Closes an active rental, charging a delay fee when it is returned late.
    async fn return_rental(
        &self,
        dto: ReturnRentalDto,
    ) -> error_stack::Result<RentalDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = RentalId::new(dto.id);
        let (rental, price_per_day) = self
            .rental_query()
            .find_with_price(&mut connection, &id)
            .await?
            .ok_or_else(|| {
                RentalError::RentalNotFound
                    .into_report()
                    .attach_printable(format!("rental_id: {}", dto.id))
            })?;
        if rental.status() == RentalStatus::Returned {
            return Err(already_returned(dto.id));
        }

        let now = self.clock().now();
        let delay_fee = rental.delay_fee_at(now, &price_per_day, dto.policy);
        let return_date = ReturnDate::new(now.date());

        // A concurrent return may have closed the rental since it was read.
        let closed = self
            .rental_modifier()
            .mark_returned(&mut connection, &id, &return_date, delay_fee.as_ref())
            .await?;
        if !closed {
            return Err(already_returned(dto.id));
        }
        connection.commit().await?;

        tracing::info!(
            rental_id = dto.id,
            delay_fee = delay_fee.as_ref().map(|fee| *fee.as_ref()),
            "rental returned"
        );
        Ok(RentalDto::from(rental.into_returned(return_date, delay_fee)))
    }
}

impl<Connection: Transaction + Send, T> ReturnRentalService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnClock
        + DependOnRentalQuery<Connection>
        + DependOnRentalModifier<Connection>
{
}

fn already_returned(id: i32) -> Report<KernelError> {
    RentalError::AlreadyReturned
        .into_report()
        .attach_printable(format!("rental_id: {id}"))
}

#[cfg(test)]
mod test {
    use kernel::prelude::entity::LateFeePolicy;
    use kernel::{KernelError, RentalError};
    use time::macros::{date, datetime};

    use crate::service::fake::InMemoryDatabase;
    use crate::service::{
        CreateCategoryService, CreateCustomerService, CreateGameService, CreateRentalService,
        GetRentalService, ReturnRentalService,
    };
    use crate::transfer::{
        CreateCategoryDto, CreateCustomerDto, CreateGameDto, CreateRentalDto, GetRentalsDto,
        RentalListDto, ReturnRentalDto,
    };

    struct Fixture {
        db: InMemoryDatabase,
        game_id: i32,
        customer_id: i32,
    }

    async fn fixture(stock_total: i32) -> error_stack::Result<Fixture, KernelError> {
        let db = InMemoryDatabase::default();
        let category_id = db
            .create_category(CreateCategoryDto {
                name: "Party".to_string(),
            })
            .await?;
        let game_id = db
            .create_game(CreateGameDto {
                name: "Dixit".to_string(),
                image: "http://image.example/dixit.jpg".to_string(),
                stock_total,
                category_id,
                price_per_day: 10,
            })
            .await?;
        let customer_id = db
            .create_customer(CreateCustomerDto {
                name: "Marina".to_string(),
                phone: "21998899222".to_string(),
                cpf: "98765432100".to_string(),
                birthday: date!(1995 - 03 - 14),
            })
            .await?;
        Ok(Fixture {
            db,
            game_id,
            customer_id,
        })
    }

    impl Fixture {
        async fn rent(&self, days_rented: i32) -> error_stack::Result<i32, KernelError> {
            self.db
                .create_rental(CreateRentalDto {
                    customer_id: self.customer_id,
                    game_id: self.game_id,
                    days_rented,
                })
                .await
        }
    }

    fn returning(id: i32, policy: LateFeePolicy) -> ReturnRentalDto {
        ReturnRentalDto { id, policy }
    }

    #[tokio::test]
    async fn shortest_rental_is_two_days() -> error_stack::Result<(), KernelError> {
        let fixture = fixture(3).await?;

        let report = fixture.rent(1).await.unwrap_err();
        assert_eq!(report.current_context(), &KernelError::InvalidArgument);
        assert_eq!(
            report.downcast_ref::<RentalError>(),
            Some(&RentalError::InvalidDuration)
        );
        assert_eq!(fixture.db.rental_count(), 0);

        fixture.rent(2).await?;
        assert_eq!(fixture.db.rental_count(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn duration_is_checked_before_references() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::default();

        let report = db
            .create_rental(CreateRentalDto {
                customer_id: 1,
                game_id: 1,
                days_rented: 0,
            })
            .await
            .unwrap_err();

        assert_eq!(
            report.downcast_ref::<RentalError>(),
            Some(&RentalError::InvalidDuration)
        );
        Ok(())
    }

    #[tokio::test]
    async fn unknown_references_are_rejected() -> error_stack::Result<(), KernelError> {
        let fixture = fixture(3).await?;

        let report = fixture
            .db
            .create_rental(CreateRentalDto {
                customer_id: fixture.customer_id,
                game_id: 99,
                days_rented: 3,
            })
            .await
            .unwrap_err();
        assert_eq!(report.current_context(), &KernelError::ReferenceNotFound);
        assert_eq!(
            report.downcast_ref::<RentalError>(),
            Some(&RentalError::GameNotFound)
        );

        let report = fixture
            .db
            .create_rental(CreateRentalDto {
                customer_id: 99,
                game_id: fixture.game_id,
                days_rented: 3,
            })
            .await
            .unwrap_err();
        assert_eq!(report.current_context(), &KernelError::ReferenceNotFound);
        assert_eq!(
            report.downcast_ref::<RentalError>(),
            Some(&RentalError::CustomerNotFound)
        );

        assert_eq!(fixture.db.rental_count(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn rental_is_priced_and_active() -> error_stack::Result<(), KernelError> {
        let fixture = fixture(3).await?;

        let id = fixture.rent(3).await?;

        let rental = fixture.db.rental(id).expect("rental was created");
        assert_eq!(*rental.original_price().as_ref(), 30);
        assert_eq!(rental.rent_date().as_ref(), &date!(2024 - 01 - 10));
        assert!(rental.return_date().is_none());
        assert!(rental.delay_fee().is_none());
        Ok(())
    }

    #[tokio::test]
    async fn exhausted_stock_is_unavailable() -> error_stack::Result<(), KernelError> {
        let fixture = fixture(1).await?;
        let first = fixture.rent(2).await?;

        let report = fixture.rent(2).await.unwrap_err();
        assert_eq!(report.current_context(), &KernelError::InvalidArgument);
        assert_eq!(
            report.downcast_ref::<RentalError>(),
            Some(&RentalError::GameUnavailable)
        );

        fixture
            .db
            .return_rental(returning(first, LateFeePolicy::default()))
            .await?;
        fixture.rent(2).await?;
        Ok(())
    }

    #[tokio::test]
    async fn on_time_return_has_no_fee() -> error_stack::Result<(), KernelError> {
        let fixture = fixture(3).await?;
        let id = fixture.rent(3).await?;
        fixture.db.fake_clock().set(datetime!(2024-01-13 00:00 UTC));

        let returned = fixture
            .db
            .return_rental(returning(id, LateFeePolicy::OverdueDays))
            .await?;

        assert_eq!(returned.return_date, Some(date!(2024 - 01 - 13)));
        assert_eq!(returned.delay_fee, None);
        assert_eq!(returned.original_price, 30);
        Ok(())
    }

    #[tokio::test]
    async fn late_return_charges_overdue_days() -> error_stack::Result<(), KernelError> {
        let fixture = fixture(3).await?;
        let id = fixture.rent(3).await?;
        fixture.db.fake_clock().set(datetime!(2024-01-15 00:00 UTC));

        let returned = fixture
            .db
            .return_rental(returning(id, LateFeePolicy::OverdueDays))
            .await?;

        assert_eq!(returned.delay_fee, Some(20));
        let stored = fixture.db.rental(id).expect("rental exists");
        assert_eq!(stored.delay_fee().map(|fee| *fee.as_ref()), Some(20));
        Ok(())
    }

    #[tokio::test]
    async fn late_return_under_legacy_policy() -> error_stack::Result<(), KernelError> {
        let fixture = fixture(3).await?;
        let id = fixture.rent(3).await?;
        fixture.db.fake_clock().set(datetime!(2024-01-15 00:00 UTC));

        let returned = fixture
            .db
            .return_rental(returning(id, LateFeePolicy::Legacy))
            .await?;

        assert_eq!(returned.delay_fee, Some(80));
        Ok(())
    }

    #[tokio::test]
    async fn second_return_is_rejected() -> error_stack::Result<(), KernelError> {
        let fixture = fixture(3).await?;
        let id = fixture.rent(3).await?;
        fixture.db.fake_clock().set(datetime!(2024-01-15 00:00 UTC));
        fixture
            .db
            .return_rental(returning(id, LateFeePolicy::OverdueDays))
            .await?;
        let first = fixture.db.rental(id);

        fixture.db.fake_clock().set(datetime!(2024-01-20 00:00 UTC));
        let report = fixture
            .db
            .return_rental(returning(id, LateFeePolicy::OverdueDays))
            .await
            .unwrap_err();

        assert_eq!(report.current_context(), &KernelError::InvalidState);
        assert_eq!(
            report.downcast_ref::<RentalError>(),
            Some(&RentalError::AlreadyReturned)
        );
        assert_eq!(fixture.db.rental(id), first);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_rental_cannot_be_returned() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::default();

        let report = db
            .return_rental(returning(5, LateFeePolicy::default()))
            .await
            .unwrap_err();

        assert_eq!(report.current_context(), &KernelError::NotFound);
        Ok(())
    }

    #[tokio::test]
    async fn only_unfiltered_listing_is_detailed() -> error_stack::Result<(), KernelError> {
        let fixture = fixture(3).await?;
        let id = fixture.rent(2).await?;

        let RentalListDto::Detailed(all) = fixture.db.get_rentals(GetRentalsDto::All).await?
        else {
            panic!("unfiltered listing must carry related rows");
        };
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].rental.id, id);
        assert_eq!(all[0].customer_name, "Marina");
        assert_eq!(all[0].game_name, "Dixit");
        assert_eq!(all[0].category_name, "Party");

        let by_customer = fixture
            .db
            .get_rentals(GetRentalsDto::ByCustomer {
                customer_id: fixture.customer_id,
            })
            .await?;
        assert!(matches!(by_customer, RentalListDto::Plain(ref rentals) if rentals.len() == 1));

        let by_game = fixture
            .db
            .get_rentals(GetRentalsDto::ByGame { game_id: 42 })
            .await?;
        assert_eq!(by_game, RentalListDto::Plain(Vec::new()));
        Ok(())
    }
}
