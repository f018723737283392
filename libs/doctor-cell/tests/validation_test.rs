use assert_matches::assert_matches;
use serde_json::json;
use shared_models::validation::ValidationCode;
use uuid::Uuid;

use doctor_cell::i18n::Locale;
use doctor_cell::models::{UpsertDoctorRequest, ValidatedDoctor};
use doctor_cell::services::validation::{
    validate_upsert, FIELD_FROM_TIME, FIELD_FROM_WEEK_DAY, FIELD_ID, FIELD_NAME, FIELD_PRICE,
    FIELD_SPECIALTY, FIELD_TO_TIME, FIELD_TO_WEEK_DAY,
};

fn valid_request() -> UpsertDoctorRequest {
    UpsertDoctorRequest {
        id: None,
        name: "Dr. Ana".to_string(),
        specialty: "Cardio".to_string(),
        appointment_price_in_cents: Some(json!(5000)),
        available_from_week_day: Some(json!(1)),
        available_to_week_day: Some(json!(5)),
        available_from_time: "08:00".to_string(),
        available_to_time: "18:00".to_string(),
    }
}

fn fields(errors: &[shared_models::validation::FieldError]) -> Vec<&str> {
    errors.iter().map(|e| e.field.as_str()).collect()
}

#[test]
fn test_accepts_valid_input_unchanged() {
    let doctor = validate_upsert(&valid_request(), Locale::En).unwrap();

    assert_eq!(
        doctor,
        ValidatedDoctor {
            id: None,
            name: "Dr. Ana".to_string(),
            specialty: "Cardio".to_string(),
            appointment_price_in_cents: 5000,
            available_from_week_day: 1,
            available_to_week_day: 5,
            available_from_time: "08:00".to_string(),
            available_to_time: "18:00".to_string(),
        }
    );
}

#[test]
fn test_empty_name_is_required() {
    let request = UpsertDoctorRequest {
        name: String::new(),
        ..valid_request()
    };

    let errors = validate_upsert(&request, Locale::En).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, FIELD_NAME);
    assert_eq!(errors[0].code, ValidationCode::Required);
    assert_eq!(errors[0].message, "required");
}

#[test]
fn test_whitespace_only_text_is_required() {
    let request = UpsertDoctorRequest {
        name: "   ".to_string(),
        specialty: "\t".to_string(),
        ..valid_request()
    };

    let errors = validate_upsert(&request, Locale::En).unwrap_err();

    assert_eq!(fields(&errors), vec![FIELD_NAME, FIELD_SPECIALTY]);
    assert!(errors.iter().all(|e| e.code == ValidationCode::Required));
}

#[test]
fn test_text_fields_are_trimmed() {
    let request = UpsertDoctorRequest {
        name: "  Dr. Ana  ".to_string(),
        specialty: " Cardio ".to_string(),
        available_from_time: " 08:00 ".to_string(),
        ..valid_request()
    };

    let doctor = validate_upsert(&request, Locale::En).unwrap();

    assert_eq!(doctor.name, "Dr. Ana");
    assert_eq!(doctor.specialty, "Cardio");
    assert_eq!(doctor.available_from_time, "08:00");
}

#[test]
fn test_price_below_one_cent_is_rejected() {
    for price in [Some(json!(0)), Some(json!(-100)), None] {
        let request = UpsertDoctorRequest {
            appointment_price_in_cents: price.clone(),
            ..valid_request()
        };

        let errors = validate_upsert(&request, Locale::En).unwrap_err();

        assert_eq!(fields(&errors), vec![FIELD_PRICE], "price {:?}", price);
        assert_eq!(errors[0].code, ValidationCode::Required);
    }
}

#[test]
fn test_price_of_one_cent_is_accepted() {
    let request = UpsertDoctorRequest {
        appointment_price_in_cents: Some(json!(1)),
        ..valid_request()
    };

    assert_eq!(validate_upsert(&request, Locale::En).unwrap().appointment_price_in_cents, 1);
}

#[test]
fn test_price_beyond_storage_range_is_rejected() {
    let request = UpsertDoctorRequest {
        appointment_price_in_cents: Some(json!(i64::from(i32::MAX) + 1)),
        ..valid_request()
    };

    let errors = validate_upsert(&request, Locale::En).unwrap_err();

    assert_eq!(errors[0].field, FIELD_PRICE);
    assert_eq!(errors[0].code, ValidationCode::Range);
}

#[test]
fn test_non_integer_price_is_required() {
    for price in [json!(0.5), json!(49.99), json!("5000"), json!(null), json!(true)] {
        let request = UpsertDoctorRequest {
            appointment_price_in_cents: Some(price.clone()),
            ..valid_request()
        };

        let errors = validate_upsert(&request, Locale::En).unwrap_err();

        assert_eq!(fields(&errors), vec![FIELD_PRICE], "price {}", price);
        assert_eq!(errors[0].code, ValidationCode::Required);
    }
}

#[test]
fn test_non_integer_week_day_is_out_of_range() {
    for day in [json!(1.5), json!("1"), json!(null), json!([1])] {
        let request = UpsertDoctorRequest {
            available_from_week_day: Some(day.clone()),
            ..valid_request()
        };

        let errors = validate_upsert(&request, Locale::En).unwrap_err();

        assert_eq!(fields(&errors), vec![FIELD_FROM_WEEK_DAY], "week day {}", day);
        assert_eq!(errors[0].code, ValidationCode::Range);
    }
}

#[test]
fn test_week_days_outside_range_are_rejected() {
    for (from, to) in [
        (Some(json!(-1)), Some(json!(5))),
        (Some(json!(1)), Some(json!(7))),
        (None, Some(json!(5))),
        (Some(json!(1)), Some(json!(42))),
    ] {
        let request = UpsertDoctorRequest {
            available_from_week_day: from.clone(),
            available_to_week_day: to.clone(),
            ..valid_request()
        };

        let errors = validate_upsert(&request, Locale::En).unwrap_err();

        assert_eq!(errors.len(), 1, "{:?}..{:?}", from, to);
        assert!(errors[0].field == FIELD_FROM_WEEK_DAY || errors[0].field == FIELD_TO_WEEK_DAY);
        assert_eq!(errors[0].code, ValidationCode::Range);
    }
}

#[test]
fn test_week_day_bounds_are_inclusive() {
    let request = UpsertDoctorRequest {
        available_from_week_day: Some(json!(0)),
        available_to_week_day: Some(json!(6)),
        ..valid_request()
    };

    let doctor = validate_upsert(&request, Locale::En).unwrap();

    assert_eq!((doctor.available_from_week_day, doctor.available_to_week_day), (0, 6));
}

#[test]
fn test_missing_times_are_required() {
    let request = UpsertDoctorRequest {
        available_from_time: String::new(),
        available_to_time: String::new(),
        ..valid_request()
    };

    let errors = validate_upsert(&request, Locale::En).unwrap_err();

    assert_eq!(fields(&errors), vec![FIELD_FROM_TIME, FIELD_TO_TIME]);
    assert!(errors.iter().all(|e| e.code == ValidationCode::Required));
}

#[test]
fn test_unpadded_time_is_a_format_error() {
    let request = UpsertDoctorRequest {
        available_from_time: "9:00".to_string(),
        ..valid_request()
    };

    let errors = validate_upsert(&request, Locale::En).unwrap_err();

    assert_eq!(fields(&errors), vec![FIELD_FROM_TIME]);
    assert_eq!(errors[0].code, ValidationCode::Format);
}

#[test]
fn test_start_after_end_is_cross_field_error() {
    let request = UpsertDoctorRequest {
        available_from_time: "18:00".to_string(),
        available_to_time: "08:00".to_string(),
        ..valid_request()
    };

    let errors = validate_upsert(&request, Locale::En).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, FIELD_TO_TIME);
    assert_eq!(errors[0].code, ValidationCode::CrossField);
    assert_eq!(errors[0].message, "start time must precede end time");
}

#[test]
fn test_equal_times_are_rejected() {
    for (from, to) in [("08:00", "08:00"), ("08:00:00", "08:00:00"), ("08:00", "08:00:00")] {
        let request = UpsertDoctorRequest {
            available_from_time: from.to_string(),
            available_to_time: to.to_string(),
            ..valid_request()
        };

        let errors = validate_upsert(&request, Locale::En).unwrap_err();

        assert_eq!(errors[0].code, ValidationCode::CrossField, "{from} vs {to}");
    }
}

#[test]
fn test_every_ordered_slot_pair_is_accepted() {
    let slots = doctor_cell::services::slots::generate_time_slots();

    for (i, from) in slots.iter().enumerate() {
        for to in &slots[i + 1..] {
            let request = UpsertDoctorRequest {
                available_from_time: from.clone(),
                available_to_time: to.clone(),
                ..valid_request()
            };
            assert!(validate_upsert(&request, Locale::En).is_ok(), "{from} < {to}");

            let reversed = UpsertDoctorRequest {
                available_from_time: to.clone(),
                available_to_time: from.clone(),
                ..valid_request()
            };
            assert_matches!(validate_upsert(&reversed, Locale::En), Err(errors) if errors[0].field == FIELD_TO_TIME);
        }
    }
}

#[test]
fn test_cross_field_rule_waits_for_field_rules() {
    let request = UpsertDoctorRequest {
        name: String::new(),
        available_from_time: "18:00".to_string(),
        available_to_time: "08:00".to_string(),
        ..valid_request()
    };

    let errors = validate_upsert(&request, Locale::En).unwrap_err();

    assert_eq!(fields(&errors), vec![FIELD_NAME]);
}

#[test]
fn test_all_field_errors_are_collected() {
    let errors = validate_upsert(&UpsertDoctorRequest::default(), Locale::En).unwrap_err();

    assert_eq!(
        fields(&errors),
        vec![
            FIELD_NAME,
            FIELD_SPECIALTY,
            FIELD_PRICE,
            FIELD_FROM_WEEK_DAY,
            FIELD_TO_WEEK_DAY,
            FIELD_FROM_TIME,
            FIELD_TO_TIME,
        ]
    );
}

#[test]
fn test_id_must_be_a_uuid() {
    let request = UpsertDoctorRequest {
        id: Some("not-a-uuid".to_string()),
        ..valid_request()
    };

    let errors = validate_upsert(&request, Locale::En).unwrap_err();
    assert_eq!(fields(&errors), vec![FIELD_ID]);
    assert_eq!(errors[0].code, ValidationCode::Format);

    let id = Uuid::new_v4();
    let request = UpsertDoctorRequest {
        id: Some(id.to_string()),
        ..valid_request()
    };
    assert_eq!(validate_upsert(&request, Locale::En).unwrap().id, Some(id));
}

#[test]
fn test_id_must_be_hyphenated() {
    let id = Uuid::new_v4();

    for raw in [
        id.simple().to_string(),
        id.braced().to_string(),
        id.urn().to_string(),
    ] {
        let request = UpsertDoctorRequest {
            id: Some(raw.clone()),
            ..valid_request()
        };

        let errors = validate_upsert(&request, Locale::En).unwrap_err();

        assert_eq!(fields(&errors), vec![FIELD_ID], "id {}", raw);
        assert_eq!(errors[0].code, ValidationCode::Format);
    }

    let request = UpsertDoctorRequest {
        id: Some(format!(" {} ", id.hyphenated())),
        ..valid_request()
    };
    assert_eq!(validate_upsert(&request, Locale::En).unwrap().id, Some(id));
}

#[test]
fn test_rejection_always_carries_errors() {
    let requests = [
        UpsertDoctorRequest::default(),
        UpsertDoctorRequest { id: Some(String::new()), ..valid_request() },
        UpsertDoctorRequest { available_to_time: "08:00".to_string(), ..valid_request() },
        UpsertDoctorRequest { available_to_week_day: Some(json!(6.0)), ..valid_request() },
    ];

    for request in &requests {
        assert_matches!(validate_upsert(request, Locale::En), Err(errors) if !errors.is_empty());
    }
}

#[test]
fn test_portuguese_messages() {
    let request = UpsertDoctorRequest {
        available_from_time: "18:00".to_string(),
        available_to_time: "08:00".to_string(),
        ..valid_request()
    };

    let errors = validate_upsert(&request, Locale::PtBr).unwrap_err();
    assert_eq!(errors[0].message, "Horário de início deve ser anterior ao horário de término.");

    let request = UpsertDoctorRequest {
        name: String::new(),
        ..valid_request()
    };
    let errors = validate_upsert(&request, Locale::PtBr).unwrap_err();
    assert_eq!(errors[0].message, "Nome é obrigatório");
}

#[test]
fn test_form_json_deserializes_with_defaults() {
    let request: UpsertDoctorRequest = serde_json::from_value(json!({
        "name": "Dr. Ana",
        "availableFromWeekDay": 1
    }))
    .unwrap();

    assert_eq!(request.specialty, "");
    assert_eq!(request.available_from_week_day, Some(json!(1)));
    assert_eq!(request.appointment_price_in_cents, None);
}
