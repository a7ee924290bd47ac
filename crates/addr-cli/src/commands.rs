use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use addr_cli::fill::{FillRequest, run_fill as fill_form};
use addr_dataset::LookupIndex;
use addr_validate::validate_pincode;

use crate::cli::{CitiesArgs, FillArgs, LookupArgs};
use crate::summary::{print_cities, print_fill_report, print_location, print_states};

pub fn run_states() -> Result<()> {
    print_states(LookupIndex::builtin());
    Ok(())
}

pub fn run_cities(args: &CitiesArgs) -> Result<()> {
    let index = LookupIndex::builtin();
    let cities: Vec<_> = match args.state.as_deref() {
        Some(state_id) => {
            if index.state_by_id(state_id).is_none() {
                bail!("unknown state: {state_id}");
            }
            index.cities_by_state(state_id).iter().collect()
        }
        None => index
            .states()
            .iter()
            .flat_map(|state| index.cities_by_state(&state.id))
            .collect(),
    };
    print_cities(index, &cities);
    Ok(())
}

/// Returns `Ok(false)` when the pincode is malformed or unknown.
pub fn run_lookup(args: &LookupArgs) -> Result<bool> {
    let pincode = args.pincode.as_str();
    let span = info_span!("lookup", pincode);
    let _guard = span.enter();

    if let Some(issue) = validate_pincode(pincode) {
        warn!(%issue, "malformed pincode");
        eprintln!("{pincode}: {issue}");
        return Ok(false);
    }
    let index = LookupIndex::builtin();
    let Some(location) = index.location_by_pincode_prefix(pincode) else {
        warn!("pincode not in dataset");
        eprintln!("{pincode}: Invalid pincode");
        return Ok(false);
    };
    let state = index
        .state_by_id(&location.state_id)
        .with_context(|| format!("dataset state missing: {}", location.state_id))?;
    let city = index
        .city_by_id(&location.city_id)
        .with_context(|| format!("dataset city missing: {}", location.city_id))?;
    info!(state = %state.id, city = %city.id, "pincode resolved");
    print_location(pincode, location, state, city);
    Ok(true)
}

/// Returns `Ok(false)` when the submission is rejected.
pub fn run_fill(args: &FillArgs) -> Result<bool> {
    let request = FillRequest {
        first_name: args.first_name.clone(),
        last_name: args.last_name.clone(),
        pincode: args.pincode.clone(),
        state: args.state.clone(),
        city: args.city.clone(),
    };
    let span = info_span!("fill");
    let report = span.in_scope(|| fill_form(&request, LookupIndex::builtin()));
    if args.json {
        let json = serde_json::to_string_pretty(&report).context("serialize fill report")?;
        println!("{json}");
    } else {
        print_fill_report(&report);
    }
    Ok(report.outcome.is_accepted())
}
