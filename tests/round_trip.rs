use approx::assert_relative_eq;
use solar_travel_sim::core::time::days_to_years;
use solar_travel_sim::core::units::kms_to_au_per_year;
use solar_travel_sim::orbits::OrbitalBody;
use solar_travel_sim::transfer::destination::DestinationRejection;
use solar_travel_sim::transfer::{
    BodyCatalog, LaunchWindow, Leg, OfferRequest, RoundTripError, RoundTripRequest,
    TravelQuery, TravelSettings, fastest_per_destination, find_travel_time, generate_offers,
    plan_round_trip,
};

fn catalog() -> BodyCatalog {
    BodyCatalog::from_bodies(vec![
        OrbitalBody::circular("VENUS", 0.723, 0.615).expect("venus"),
        OrbitalBody::circular("EARTH", 1.0, 1.0).expect("earth"),
        OrbitalBody::circular("MARS", 1.524, 1.88).expect("mars"),
    ])
    .expect("catalog")
}

fn request(destination: &str) -> RoundTripRequest {
    RoundTripRequest {
        origin: "earth".into(),
        destination: destination.into(),
        launch_time: 6.0,
        stay_duration: days_to_years(30.0),
        speed: kms_to_au_per_year(11.0),
    }
}

#[test]
fn total_duration_is_the_sum_of_its_parts() {
    let catalog = catalog();
    let plan = plan_round_trip(&catalog, &request("mars"), &TravelSettings::default())
        .expect("plan");

    assert_eq!(plan.origin, "EARTH");
    assert_eq!(plan.destination, "MARS");
    assert_eq!(
        plan.total_duration(),
        plan.outbound.elapsed_time + plan.stay_duration + plan.inbound.elapsed_time
    );
    assert_eq!(plan.total_on_site, plan.outbound.elapsed_time + plan.stay_duration);
    assert_eq!(plan.inbound.departure_time, plan.launch_time + plan.total_on_site);
    assert!(plan.return_time() > plan.inbound.departure_time);
}

#[test]
fn return_leg_is_an_ordinary_query_with_roles_swapped() {
    let catalog = catalog();
    let settings = TravelSettings::default();
    let plan = plan_round_trip(&catalog, &request("mars"), &settings).expect("plan");

    let mars = catalog.get("MARS").expect("mars");
    let earth = catalog.get("EARTH").expect("earth");
    let query = TravelQuery::new(mars, earth, plan.inbound.departure_time, plan.inbound.speed)
        .expect("query");
    let direct = find_travel_time(&query, &settings).expect("return");
    assert_eq!(direct, plan.inbound);
}

#[test]
fn unknown_destination_is_rejected() {
    let err = plan_round_trip(&catalog(), &request("pluto"), &TravelSettings::default())
        .unwrap_err();
    match err {
        RoundTripError::Destination(err) => {
            assert_eq!(err.reason(), DestinationRejection::NotInTable)
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn destination_missing_from_catalog_is_rejected() {
    let err = plan_round_trip(&catalog(), &request("jupiter"), &TravelSettings::default())
        .unwrap_err();
    assert!(matches!(
        err,
        RoundTripError::Destination(ref e) if e.reason() == DestinationRejection::MissingFromCatalog
    ));
}

#[test]
fn origin_cannot_be_the_destination() {
    let err = plan_round_trip(&catalog(), &request("ziemia"), &TravelSettings::default())
        .unwrap_err();
    assert!(matches!(
        err,
        RoundTripError::Destination(ref e) if e.reason() == DestinationRejection::SameAsOrigin
    ));
}

#[test]
fn negative_stay_is_rejected() {
    let mut bad = request("mars");
    bad.stay_duration = -1.0;
    let err = plan_round_trip(&catalog(), &bad, &TravelSettings::default()).unwrap_err();
    assert_eq!(err, RoundTripError::InvalidStay(-1.0));
}

#[test]
fn unreachable_outbound_leg_reports_not_found() {
    // A MARS sharing Earth's orbit and phase: the target sweeps an arc at about 29.8 km/s
    // while the straight chord to it never outgrows that arc, so a 40 km/s craft that
    // leaves from the same point is always ahead of it.
    let catalog = BodyCatalog::from_bodies(vec![
        OrbitalBody::circular("EARTH", 1.0, 1.0).expect("earth"),
        OrbitalBody::circular("MARS", 1.0, 1.0).expect("co-orbital mars"),
    ])
    .expect("catalog");
    let mut fast = request("mars");
    fast.launch_time = 0.0;
    fast.speed = kms_to_au_per_year(40.0);

    let err = plan_round_trip(&catalog, &fast, &TravelSettings::default()).unwrap_err();
    assert_eq!(
        err,
        RoundTripError::NotFound {
            leg: Leg::Outbound,
            target: "MARS".into()
        }
    );
}

#[test]
fn offers_match_individual_plans() {
    let catalog = catalog();
    let settings = TravelSettings::default();
    let offer_request = OfferRequest {
        origin: "earth".into(),
        destinations: vec!["mars".into(), "venus".into()],
        window: LaunchWindow {
            start: 6.0,
            end: 6.5,
            step: 0.25,
        },
        stay_duration: days_to_years(30.0),
        speed: kms_to_au_per_year(11.0),
    };

    let offers = generate_offers(&catalog, &offer_request, &settings).expect("window");
    assert_eq!(offers.len(), 6);
    assert_eq!(offers[0].destination, "mars");
    assert_eq!(offers[3].destination, "venus");
    assert_relative_eq!(offers[4].launch_time, 6.25);

    let first = offers[0].outcome.as_ref().expect("earth-mars offer");
    let direct = plan_round_trip(&catalog, &request("mars"), &settings).expect("plan");
    assert_eq!(first, &direct);

    let fastest = fastest_per_destination(&offers);
    assert!(fastest.len() <= 2);
    for best in fastest {
        let best_total = best.outcome.as_ref().expect("successful").total_duration();
        for offer in offers
            .iter()
            .filter(|o| o.destination == best.destination)
        {
            if let Ok(plan) = &offer.outcome {
                assert!(best_total <= plan.total_duration());
            }
        }
    }
}
